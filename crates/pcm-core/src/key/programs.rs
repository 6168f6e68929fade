//! Seed/key program table.
//!
//! 256 rows of 13 bytes. Byte 0 is not read by the interpreter; each
//! row encodes up to four (opcode, hi, lo) steps at offsets 1, 4, 7
//! and 10. The row index is the key algorithm number carried in the
//! OSID registry.

pub(super) const KEY_PROGRAMS: [[u8; 13]; 256] = [
    [0x85, 0xb6, 0x96, 0x0a, 0x2a, 0xa9, 0x21, 0x41, 0x4b, 0x52, 0xe7, 0x2e, 0x01],
    [0x01, 0x14, 0x61, 0x02, 0x6b, 0x6a, 0x05, 0x7e, 0xcb, 0x03, 0x4c, 0x06, 0x6e],
    [0x6f, 0x7e, 0xed, 0x96, 0x14, 0xe4, 0xe0, 0x6b, 0xcb, 0x01, 0x2a, 0x61, 0x87],
    [0x87, 0x14, 0xd0, 0x19, 0x7e, 0xe2, 0x7e, 0x4c, 0x09, 0xfb, 0x2a, 0xa6, 0xf4],
    [0xf5, 0x98, 0xb0, 0xfc, 0x7e, 0xdb, 0x7f, 0x4c, 0x06, 0x1a, 0x14, 0xda, 0x68],
    [0x69, 0x14, 0xe2, 0xc5, 0x98, 0x81, 0x51, 0x6b, 0xd5, 0x02, 0x2a, 0x08, 0xa0],
    [0xa0, 0x2a, 0xa9, 0x3a, 0x14, 0x01, 0xbf, 0x6b, 0xed, 0x0b, 0x4c, 0x05, 0xcd],
    [0xcc, 0x14, 0xae, 0x8d, 0x7e, 0xfb, 0xd9, 0x4c, 0x02, 0xf7, 0x98, 0xca, 0x34],
    [0x34, 0x2a, 0xc0, 0x7b, 0x14, 0x6f, 0x58, 0x98, 0xc1, 0x26, 0x4c, 0x06, 0xc0],
    [0xc0, 0x14, 0x01, 0x38, 0x4c, 0x05, 0x12, 0x7e, 0x46, 0x96, 0x2a, 0xe2, 0x02],
    [0x02, 0x14, 0x42, 0xc4, 0x98, 0xb6, 0xbc, 0x4c, 0x05, 0x2e, 0x7e, 0x30, 0x2c],
    [0x2c, 0x98, 0x38, 0x08, 0x7e, 0xf2, 0x94, 0x6b, 0xe0, 0x02, 0x4c, 0x03, 0x48],
    [0x48, 0x7e, 0x72, 0xe0, 0x98, 0xb9, 0xb0, 0x14, 0x5c, 0x27, 0x2a, 0xab, 0x08],
    [0x08, 0x7e, 0xc0, 0x3a, 0x2a, 0xa4, 0x0d, 0x6b, 0x47, 0x05, 0x4c, 0x0b, 0x05],
    [0x04, 0x6b, 0x50, 0x02, 0x7e, 0x50, 0xd2, 0x4c, 0x05, 0xfd, 0x98, 0x18, 0xcb],
    [0xca, 0x7e, 0x30, 0xcf, 0x6b, 0x04, 0x05, 0x2a, 0xd5, 0x2e, 0x98, 0xd9, 0xda],
    [0xdb, 0x7e, 0xa0, 0x0f, 0x14, 0x6b, 0x04, 0x6b, 0x00, 0x05, 0x4c, 0x01, 0x85],
    [0x85, 0x98, 0x32, 0x69, 0x14, 0xfc, 0xb3, 0x7e, 0xf9, 0xcb, 0x6b, 0xae, 0x03],
    [0x03, 0x7e, 0xb0, 0x63, 0x4c, 0x01, 0x40, 0x14, 0x4e, 0x42, 0x98, 0xca, 0x34],
    [0x35, 0x98, 0x2c, 0x01, 0x14, 0xc0, 0x28, 0x2a, 0x43, 0x69, 0x6b, 0xc6, 0x01],
    [0x01, 0x4c, 0x01, 0x89, 0x2a, 0xd3, 0xd6, 0x14, 0x8a, 0x29, 0x7e, 0xe0, 0x47],
    [0x46, 0x4c, 0x01, 0x14, 0x2a, 0xde, 0xcc, 0x98, 0x97, 0x75, 0x14, 0x8a, 0x1b],
    [0x1a, 0x2a, 0x52, 0x96, 0x7e, 0x60, 0xac, 0x14, 0xf0, 0x56, 0x6b, 0x47, 0x01],
    [0x00, 0x7e, 0x8c, 0x08, 0x4c, 0x09, 0xb0, 0x14, 0xf4, 0xab, 0x2a, 0x62, 0xcb],
    [0xca, 0x14, 0x81, 0x4a, 0x4c, 0x06, 0xe4, 0x98, 0x91, 0x70, 0x2a, 0x05, 0x4c],
    [0x4c, 0x14, 0x18, 0x46, 0x4c, 0x06, 0x60, 0x98, 0x70, 0x73, 0x7e, 0x18, 0x90],
    [0x90, 0x4c, 0x07, 0x0d, 0x98, 0xb0, 0x83, 0x14, 0x30, 0x85, 0x2a, 0xc2, 0x18],
    [0x18, 0x6b, 0x14, 0x03, 0x2a, 0x34, 0xc0, 0x14, 0x34, 0xd1, 0x4c, 0x01, 0xd1],
    [0xd0, 0x7e, 0x80, 0x3f, 0x14, 0x41, 0x81, 0x4c, 0x0b, 0x93, 0x98, 0xb9, 0x73],
    [0x72, 0x4c, 0x05, 0x21, 0x14, 0x1e, 0x17, 0x7e, 0x77, 0xcb, 0x2a, 0xcd, 0x42],
    [0x42, 0x98, 0x07, 0x4f, 0x14, 0x18, 0x01, 0x7e, 0x0d, 0x3b, 0x2a, 0x02, 0xfe],
    [0xfe, 0x7e, 0xd3, 0x5b, 0x14, 0x52, 0x2c, 0x4c, 0x01, 0x0c, 0x98, 0x4a, 0x6e],
    [0x6e, 0x98, 0x90, 0x48, 0x6b, 0x04, 0x07, 0x14, 0x10, 0x8a, 0x7e, 0x04, 0x98],
    [0x98, 0x14, 0x0c, 0x5c, 0x4c, 0x01, 0x3e, 0x6b, 0x2b, 0x09, 0x98, 0x86, 0x30],
    [0x30, 0x6b, 0xa5, 0x05, 0x2a, 0x0e, 0xd4, 0x7e, 0x46, 0x69, 0x14, 0xe0, 0x1f],
    [0x1e, 0x4c, 0x05, 0x64, 0x14, 0x10, 0x94, 0x2a, 0xa2, 0x04, 0x98, 0xb1, 0x4b],
    [0x4a, 0x2a, 0x5b, 0x5a, 0x6b, 0x0c, 0x03, 0x7e, 0x90, 0x8b, 0x14, 0x14, 0x24],
    [0x24, 0x2a, 0x96, 0x31, 0x98, 0x01, 0x01, 0x14, 0x80, 0x38, 0x6b, 0x0e, 0x02],
    [0x02, 0x14, 0x2a, 0x02, 0x6b, 0xd5, 0x01, 0x7e, 0xf8, 0x01, 0x2a, 0x25, 0x07],
    [0x06, 0x98, 0x1f, 0xde, 0x7e, 0xe1, 0xb7, 0x14, 0x8e, 0x19, 0x4c, 0x09, 0x24],
    [0x24, 0x14, 0x52, 0x01, 0x7e, 0x38, 0x97, 0x2a, 0xbe, 0x38, 0x98, 0xd4, 0x28],
    [0x28, 0x14, 0xd1, 0x80, 0x4c, 0x0b, 0x00, 0x98, 0xf2, 0xcc, 0x2a, 0x51, 0x0c],
    [0x0c, 0x4c, 0x0a, 0x28, 0x14, 0xd3, 0xc5, 0x7e, 0xf8, 0x63, 0x6b, 0xff, 0x0b],
    [0x0a, 0x4c, 0x07, 0x00, 0x7e, 0xee, 0x18, 0x14, 0xd0, 0xc1, 0x2a, 0x0a, 0x3a],
    [0x3a, 0x98, 0x90, 0x39, 0x6b, 0x20, 0x07, 0x4c, 0x0b, 0x2a, 0x14, 0x0f, 0x04],
    [0x04, 0x2a, 0xb2, 0x30, 0x14, 0x30, 0xaa, 0x7e, 0x74, 0xf7, 0x6b, 0x40, 0x07],
    [0x06, 0x14, 0x1f, 0x23, 0x6b, 0x3c, 0x0b, 0x2a, 0x50, 0xf5, 0x7e, 0xf4, 0x1f],
    [0x1e, 0x7e, 0xf4, 0x1f, 0x2a, 0x0c, 0x4c, 0x98, 0x01, 0xac, 0x4c, 0x06, 0x96],
    [0x96, 0x4c, 0x0a, 0x80, 0x14, 0x0f, 0x56, 0x98, 0x97, 0x2f, 0x7e, 0x64, 0x27],
    [0x26, 0x7e, 0xfb, 0x95, 0x4c, 0x0a, 0xf1, 0x2a, 0x63, 0x75, 0x98, 0x64, 0x1e],
    [0x1e, 0x14, 0x51, 0xa2, 0x2a, 0x94, 0x7b, 0x6b, 0x08, 0x0b, 0x4c, 0x02, 0x40],
    [0x40, 0x2a, 0xc0, 0xc0, 0x98, 0x77, 0x28, 0x4c, 0x01, 0x0d, 0x14, 0x41, 0x01],
    [0x00, 0x7e, 0xa8, 0x22, 0x6b, 0x80, 0x01, 0x98, 0x17, 0xbd, 0x14, 0x8e, 0x20],
    [0x20, 0x14, 0xf0, 0x86, 0x6b, 0xb9, 0x06, 0x98, 0xb1, 0x09, 0x4c, 0x02, 0xc1],
    [0xc0, 0x2a, 0x21, 0x80, 0x6b, 0x98, 0x06, 0x14, 0x20, 0x17, 0x4c, 0x02, 0x1c],
    [0x1c, 0x6b, 0x6f, 0x03, 0x4c, 0x09, 0x11, 0x14, 0x2a, 0x0d, 0x98, 0x2c, 0x91],
    [0x90, 0x4c, 0x01, 0x31, 0x98, 0x3a, 0x72, 0x2a, 0x9c, 0x3d, 0x7e, 0x99, 0xed],
    [0xec, 0x6b, 0x65, 0x07, 0x4c, 0x0a, 0x77, 0x7e, 0xf8, 0xda, 0x98, 0x3f, 0x52],
    [0x52, 0x2a, 0x1e, 0x79, 0x6b, 0x99, 0x03, 0x7e, 0x5b, 0xa2, 0x98, 0x73, 0x1e],
    [0x1e, 0x14, 0x31, 0x84, 0x7e, 0x6e, 0xe0, 0x98, 0x88, 0x87, 0x2a, 0x6d, 0x41],
    [0x40, 0x2a, 0x0c, 0xe7, 0x6b, 0x5a, 0x07, 0x7e, 0xb2, 0x98, 0x14, 0xf1, 0x51],
    [0x50, 0x2a, 0x54, 0xa6, 0x14, 0x59, 0xd5, 0x4c, 0x06, 0x72, 0x6b, 0x57, 0x0a],
    [0x0a, 0x2a, 0x5f, 0x46, 0x6b, 0x41, 0x03, 0x98, 0x05, 0x64, 0x7e, 0xb3, 0xd4],
    [0xd4, 0x2a, 0x8b, 0x90, 0x4c, 0x05, 0x61, 0x7e, 0x94, 0x80, 0x14, 0x5d, 0x26],
    [0x26, 0x98, 0x6a, 0x65, 0x4c, 0x07, 0xb2, 0x2a, 0xbc, 0x72, 0x7e, 0x76, 0x71],
    [0x70, 0x98, 0x7f, 0xe6, 0x2a, 0x2e, 0xb1, 0x4c, 0x06, 0x70, 0x14, 0x06, 0x67],
    [0x66, 0x7e, 0xf1, 0x3e, 0x4c, 0x01, 0x05, 0x2a, 0x10, 0x60, 0x14, 0x93, 0xc1],
    [0xc0, 0x7e, 0xe4, 0x35, 0x6b, 0x78, 0x06, 0x2a, 0x10, 0x16, 0x98, 0xa7, 0x7b],
    [0x7a, 0x4c, 0x02, 0xeb, 0x98, 0x3b, 0xe7, 0x14, 0x43, 0x30, 0x6b, 0xab, 0x06],
    [0x06, 0x2a, 0x84, 0xb5, 0x98, 0x01, 0x26, 0x14, 0xbb, 0x65, 0x7e, 0x41, 0x04],
    [0x04, 0x7e, 0xcc, 0x06, 0x14, 0xcd, 0xf6, 0x6b, 0x4a, 0x07, 0x4c, 0x05, 0x8f],
    [0x8e, 0x14, 0x6a, 0xca, 0x7e, 0x6a, 0x1c, 0x2a, 0xa9, 0x31, 0x6b, 0xac, 0x07],
    [0x06, 0x98, 0xbc, 0xc7, 0x14, 0xcb, 0xb3, 0x7e, 0xc5, 0xe7, 0x4c, 0x07, 0xdc],
    [0xdc, 0x7e, 0xe5, 0x9d, 0x6b, 0x4b, 0x06, 0x4c, 0x02, 0x8a, 0x98, 0x03, 0xaf],
    [0xae, 0x98, 0x5f, 0xad, 0x4c, 0x07, 0x05, 0x6b, 0x22, 0x02, 0x14, 0x39, 0x8a],
    [0x8a, 0x2a, 0x49, 0x31, 0x98, 0xe0, 0xf2, 0x6b, 0xcb, 0x0a, 0x4c, 0x0b, 0xea],
    [0xea, 0x2a, 0x7e, 0x5a, 0x98, 0x08, 0x62, 0x4c, 0x05, 0x0c, 0x6b, 0xe5, 0x05],
    [0x04, 0x7e, 0xfa, 0xd7, 0x14, 0x08, 0x50, 0x4c, 0x0a, 0x6e, 0x98, 0xc6, 0x2d],
    [0x2c, 0x7e, 0xff, 0x12, 0x14, 0xad, 0xd3, 0x98, 0xe0, 0x35, 0x2a, 0x97, 0x27],
    [0x26, 0x4c, 0x0a, 0x30, 0x14, 0x08, 0x50, 0x7e, 0x35, 0xf8, 0x6b, 0x25, 0x02],
    [0x02, 0x6b, 0xd2, 0x06, 0x2a, 0x4c, 0xa5, 0x4c, 0x03, 0x4c, 0x7e, 0xa2, 0x8e],
    [0x8e, 0x14, 0x1e, 0xb8, 0x7e, 0xe1, 0xa2, 0x6b, 0x84, 0x0b, 0x98, 0x60, 0x10],
    [0x10, 0x6b, 0x83, 0x03, 0x14, 0x60, 0xbc, 0x7e, 0x20, 0x9c, 0x98, 0x02, 0x18],
    [0x18, 0x2a, 0x1a, 0xef, 0x6b, 0x1a, 0x02, 0x7e, 0x99, 0xf8, 0x4c, 0x01, 0x0c],
    [0x0c, 0x14, 0x14, 0x30, 0x4c, 0x0a, 0x07, 0x6b, 0x01, 0x01, 0x7e, 0xe8, 0x73],
    [0x72, 0x14, 0x10, 0x83, 0x4c, 0x07, 0x3b, 0x6b, 0xeb, 0x03, 0x98, 0x1e, 0x01],
    [0x00, 0x14, 0xb4, 0x10, 0x2a, 0x3c, 0x2d, 0x7e, 0xb0, 0x85, 0x6b, 0xac, 0x03],
    [0x02, 0x6b, 0xb8, 0x05, 0x14, 0xa1, 0x96, 0x98, 0x23, 0x1d, 0x7e, 0xc0, 0x06],
    [0x06, 0x4c, 0x06, 0x37, 0x6b, 0x84, 0x07, 0x98, 0x53, 0xcb, 0x7e, 0x2c, 0x19],
    [0x18, 0x7e, 0x50, 0xd8, 0x14, 0x06, 0xdd, 0x98, 0x0e, 0xea, 0x4c, 0x03, 0xd7],
    [0xd6, 0x4c, 0x02, 0x23, 0x14, 0x70, 0xf3, 0x98, 0x85, 0x17, 0x2a, 0x9a, 0xe8],
    [0xe8, 0x98, 0x64, 0x9a, 0x6b, 0x9a, 0x01, 0x14, 0x41, 0x40, 0x7e, 0x10, 0x6e],
    [0x6e, 0x4c, 0x0a, 0xb4, 0x2a, 0xdf, 0xdc, 0x98, 0x76, 0x0a, 0x7e, 0x20, 0xc1],
    [0xc0, 0x4c, 0x0a, 0x71, 0x6b, 0x49, 0x01, 0x7e, 0xc0, 0x47, 0x14, 0xf4, 0x8f],
    [0x8e, 0x98, 0x6b, 0xed, 0x2a, 0x87, 0xa7, 0x14, 0xd0, 0xf1, 0x6b, 0xf9, 0x03],
    [0x02, 0x14, 0x75, 0x07, 0x4c, 0x09, 0xc1, 0x6b, 0x59, 0x06, 0x7e, 0x08, 0x73],
    [0x72, 0x7e, 0x20, 0x22, 0x4c, 0x01, 0x0e, 0x14, 0x40, 0x10, 0x98, 0xa9, 0x11],
    [0x10, 0x4c, 0x0a, 0x86, 0x14, 0x4f, 0x54, 0x6b, 0x50, 0x01, 0x2a, 0x1b, 0x06],
    [0x06, 0x2a, 0x58, 0xa5, 0x14, 0x59, 0x51, 0x6b, 0xd4, 0x01, 0x7e, 0x10, 0x40],
    [0x40, 0x4c, 0x05, 0x58, 0x14, 0x08, 0x20, 0x6b, 0x02, 0x0b, 0x2a, 0xa0, 0x92],
    [0x92, 0x98, 0xc2, 0x24, 0x14, 0x9a, 0xe3, 0x4c, 0x07, 0x08, 0x6b, 0x07, 0x05],
    [0x04, 0x6b, 0x61, 0x06, 0x7e, 0x75, 0xcb, 0x4c, 0x01, 0x0a, 0x14, 0x63, 0x77],
    [0x76, 0x98, 0x64, 0x47, 0x4c, 0x07, 0x2f, 0x2a, 0x9e, 0xd0, 0x7e, 0x90, 0x87],
    [0x86, 0x2a, 0x39, 0xd6, 0x7e, 0xe2, 0x87, 0x98, 0xe7, 0x07, 0x4c, 0x05, 0x29],
    [0x28, 0x4c, 0x05, 0x6a, 0x7e, 0xf8, 0x10, 0x98, 0x8f, 0x50, 0x2a, 0x40, 0x56],
    [0x56, 0x2a, 0x0d, 0xc6, 0x7e, 0x07, 0xb8, 0x6b, 0x1b, 0x0b, 0x14, 0xb0, 0x35],
    [0x34, 0x98, 0xd7, 0xb6, 0x6b, 0x01, 0x0b, 0x4c, 0x03, 0xfc, 0x7e, 0xf7, 0xbf],
    [0xbe, 0x7e, 0x84, 0x03, 0x2a, 0x30, 0x16, 0x98, 0x67, 0xc9, 0x14, 0x84, 0x5e],
    [0x5e, 0x4c, 0x05, 0x0e, 0x14, 0xfd, 0x83, 0x98, 0xe4, 0x0c, 0x7e, 0x8f, 0xbf],
    [0xbe, 0x7e, 0x10, 0xe4, 0x6b, 0x5e, 0x0b, 0x4c, 0x05, 0xdf, 0x98, 0x84, 0x39],
    [0x38, 0x7e, 0x0e, 0x8f, 0x4c, 0x05, 0x01, 0x98, 0xa4, 0x6e, 0x6b, 0xb3, 0x06],
    [0x06, 0x4c, 0x0a, 0x1c, 0x98, 0xb0, 0x61, 0x2a, 0xba, 0x02, 0x14, 0x76, 0x40],
    [0x40, 0x4c, 0x03, 0x08, 0x14, 0x89, 0x2e, 0x7e, 0x86, 0x42, 0x6b, 0x28, 0x02],
    [0x02, 0x4c, 0x06, 0x2c, 0x6b, 0x2f, 0x09, 0x98, 0x85, 0xfb, 0x2a, 0x30, 0x3e],
    [0x3e, 0x14, 0xb1, 0xc2, 0x98, 0xbc, 0x3d, 0x6b, 0x25, 0x0b, 0x2a, 0xe5, 0xb8],
    [0xb8, 0x2a, 0xd6, 0x02, 0x4c, 0x01, 0x4b, 0x6b, 0xec, 0x03, 0x98, 0x5b, 0x83],
    [0x82, 0x6b, 0xc2, 0x07, 0x14, 0xbe, 0x2b, 0x98, 0xd6, 0xca, 0x2a, 0x77, 0x92],
    [0x92, 0x98, 0x60, 0xfa, 0x14, 0xd2, 0x30, 0x4c, 0x09, 0x55, 0x7e, 0x0e, 0x24],
    [0x24, 0x4c, 0x0b, 0xd0, 0x14, 0xe7, 0x96, 0x98, 0x70, 0xf9, 0x6b, 0x79, 0x0b],
    [0x0a, 0x98, 0x6f, 0x89, 0x4c, 0x0b, 0x30, 0x6b, 0x40, 0x07, 0x14, 0x20, 0x2d],
    [0x2c, 0x6b, 0x9a, 0x09, 0x2a, 0xad, 0xda, 0x14, 0xbe, 0x8c, 0x4c, 0x0b, 0xcb],
    [0xca, 0x7e, 0x0d, 0xd6, 0x2a, 0xdc, 0x51, 0x14, 0xe0, 0x0c, 0x6b, 0x0e, 0x03],
    [0x02, 0x4c, 0x0b, 0xff, 0x2a, 0xd0, 0xc6, 0x6b, 0x1e, 0x03, 0x7e, 0x86, 0x4a],
    [0x4a, 0x7e, 0xb7, 0x9a, 0x4c, 0x05, 0xb3, 0x14, 0x75, 0xe0, 0x6b, 0xc0, 0x0b],
    [0x0a, 0x14, 0x87, 0x78, 0x4c, 0x01, 0xd0, 0x98, 0x04, 0x6e, 0x2a, 0x28, 0x07],
    [0x06, 0x2a, 0x98, 0x06, 0x6b, 0x0a, 0x0a, 0x4c, 0x0a, 0x51, 0x98, 0xf4, 0xeb],
    [0xea, 0x6b, 0x0a, 0x03, 0x14, 0xe3, 0x1d, 0x7e, 0xd8, 0xa3, 0x98, 0xa0, 0x48],
    [0x48, 0x6b, 0x2c, 0x09, 0x14, 0x50, 0x04, 0x98, 0x80, 0x40, 0x7e, 0xf9, 0x33],
    [0x32, 0x98, 0x61, 0xdf, 0x14, 0x02, 0x25, 0x7e, 0xc4, 0x4b, 0x2a, 0xa0, 0x66],
    [0x66, 0x14, 0x1d, 0x47, 0x7e, 0x85, 0x0e, 0x2a, 0x84, 0xa1, 0x98, 0xbc, 0xe6],
    [0xe6, 0x14, 0xf4, 0x37, 0x98, 0x0e, 0x31, 0x6b, 0x74, 0x06, 0x2a, 0x3b, 0x8a],
    [0x8a, 0x14, 0x57, 0xcc, 0x7e, 0xa3, 0x0c, 0x98, 0x50, 0x54, 0x2a, 0xf2, 0xab],
    [0xaa, 0x14, 0x3d, 0x06, 0x7e, 0xf4, 0x45, 0x6b, 0xc4, 0x01, 0x4c, 0x01, 0xc3],
    [0xc2, 0x7e, 0x05, 0x52, 0x2a, 0xea, 0x51, 0x4c, 0x03, 0xef, 0x14, 0xff, 0xd8],
    [0xd8, 0x7e, 0x45, 0x13, 0x2a, 0x54, 0x60, 0x98, 0x52, 0x4c, 0x14, 0xa0, 0xf8],
    [0xf8, 0x98, 0x0a, 0xd0, 0x4c, 0x09, 0x03, 0x6b, 0x25, 0x09, 0x14, 0x74, 0x1d],
    [0x1c, 0x98, 0xae, 0x06, 0x14, 0xb9, 0x6b, 0x7e, 0xb1, 0x2d, 0x6b, 0x00, 0x07],
    [0x06, 0x14, 0x58, 0x04, 0x4c, 0x05, 0x20, 0x7e, 0xa1, 0x04, 0x98, 0x3a, 0xd4],
    [0xd4, 0x98, 0x8c, 0x3d, 0x14, 0x70, 0x8f, 0x4c, 0x06, 0x10, 0x7e, 0x02, 0xc0],
    [0xc0, 0x4c, 0x02, 0xf7, 0x7e, 0xa5, 0x63, 0x2a, 0x01, 0x29, 0x14, 0x11, 0x95],
    [0x94, 0x14, 0xc2, 0x1a, 0x98, 0xc2, 0x4c, 0x6b, 0xcc, 0x06, 0x2a, 0x31, 0xc1],
    [0xc0, 0x14, 0x40, 0x13, 0x7e, 0x74, 0x87, 0x98, 0x95, 0x4b, 0x2a, 0x4f, 0x15],
    [0x14, 0x14, 0x21, 0xdb, 0x98, 0x2f, 0x03, 0x2a, 0xab, 0x58, 0x7e, 0x48, 0xdf],
    [0xde, 0x14, 0x14, 0xf0, 0x98, 0x03, 0x09, 0x2a, 0xe2, 0xd4, 0x4c, 0x02, 0xc3],
    [0xc2, 0x98, 0xa0, 0x43, 0x14, 0x80, 0x0b, 0x2a, 0x2d, 0x01, 0x4c, 0x02, 0x57],
    [0x56, 0x6b, 0x11, 0x03, 0x2a, 0xe2, 0x0e, 0x98, 0xb7, 0x54, 0x14, 0x92, 0xe0],
    [0xe0, 0x4c, 0x06, 0x58, 0x98, 0xa0, 0x60, 0x2a, 0x10, 0x40, 0x14, 0xee, 0x4c],
    [0x4c, 0x98, 0x2a, 0x03, 0x4c, 0x05, 0x2c, 0x14, 0xb0, 0x13, 0x2a, 0xd4, 0xeb],
    [0xea, 0x98, 0x02, 0x1d, 0x14, 0x5b, 0x11, 0x2a, 0x77, 0x80, 0x7e, 0xd8, 0x75],
    [0x74, 0x6b, 0x05, 0x02, 0x7e, 0xab, 0x16, 0x14, 0x21, 0x93, 0x4c, 0x06, 0xb8],
    [0xb8, 0x7e, 0x80, 0x0b, 0x4c, 0x05, 0x59, 0x2a, 0x80, 0x8e, 0x14, 0x1d, 0xa3],
    [0xa2, 0x14, 0x75, 0xb8, 0x4c, 0x05, 0x98, 0x98, 0x11, 0x5d, 0x7e, 0xd4, 0x4f],
    [0x4e, 0x4c, 0x06, 0x02, 0x14, 0xd8, 0x41, 0x6b, 0xef, 0x07, 0x98, 0xa6, 0x1c],
    [0x1c, 0x7e, 0x5e, 0xbd, 0x98, 0x60, 0xb7, 0x6b, 0x04, 0x06, 0x2a, 0xa4, 0x43],
    [0x42, 0x2a, 0x87, 0x3f, 0x7e, 0x18, 0x82, 0x98, 0xf6, 0xb3, 0x14, 0x38, 0xfc],
    [0xfc, 0x4c, 0x09, 0x48, 0x2a, 0x71, 0xfa, 0x14, 0x6c, 0x91, 0x98, 0xf3, 0x47],
    [0x46, 0x7e, 0xfb, 0xf5, 0x14, 0x5a, 0xa8, 0x98, 0x32, 0xd8, 0x2a, 0xcd, 0x30],
    [0x30, 0x14, 0x20, 0xea, 0x98, 0x0f, 0x1d, 0x4c, 0x07, 0x02, 0x2a, 0xa0, 0x03],
    [0x02, 0x14, 0xd0, 0xa1, 0x7e, 0x64, 0xc1, 0x4c, 0x01, 0x0a, 0x2a, 0xfe, 0x71],
    [0x70, 0x4c, 0x01, 0xfe, 0x98, 0x33, 0x1a, 0x2a, 0xc0, 0xd4, 0x7e, 0x41, 0x80],
    [0x80, 0x7e, 0xfc, 0xc2, 0x4c, 0x0b, 0x3a, 0x98, 0x8a, 0x66, 0x14, 0xd1, 0x09],
    [0x08, 0x2a, 0xf1, 0x80, 0x14, 0xe8, 0x04, 0x7e, 0xd4, 0x01, 0x6b, 0x79, 0x0b],
    [0x0a, 0x4c, 0x0a, 0x7f, 0x6b, 0x38, 0x0b, 0x14, 0xe1, 0x4e, 0x98, 0x40, 0x11],
    [0x10, 0x4c, 0x09, 0x1e, 0x7e, 0x1c, 0xfa, 0x14, 0x3f, 0x1a, 0x98, 0x11, 0x76],
    [0x76, 0x2a, 0xa2, 0x0a, 0x14, 0x16, 0x80, 0x98, 0x80, 0x48, 0x4c, 0x09, 0x8a],
    [0x8a, 0x14, 0x80, 0x88, 0x2a, 0x70, 0x59, 0x4c, 0x01, 0x3d, 0x6b, 0x04, 0x07],
    [0x06, 0x4c, 0x05, 0x28, 0x98, 0x80, 0x19, 0x14, 0xc9, 0xac, 0x2a, 0x91, 0xc6],
    [0xc6, 0x6b, 0x60, 0x02, 0x7e, 0xcb, 0x25, 0x14, 0x74, 0x02, 0x98, 0xb6, 0x01],
    [0x00, 0x14, 0xc3, 0x0e, 0x4c, 0x02, 0x30, 0x2a, 0x4e, 0x30, 0x98, 0x29, 0x80],
    [0x80, 0x98, 0x08, 0xd4, 0x14, 0x29, 0x06, 0x2a, 0xf4, 0xba, 0x4c, 0x05, 0x16],
    [0x16, 0x7e, 0x28, 0x80, 0x14, 0x63, 0x05, 0x2a, 0xd1, 0x61, 0x4c, 0x02, 0x00],
    [0x00, 0x98, 0xa0, 0x48, 0x6b, 0x3e, 0x01, 0x4c, 0x02, 0xd8, 0x14, 0x81, 0x0c],
    [0x0c, 0x98, 0x1e, 0x09, 0x14, 0x08, 0x86, 0x7e, 0xaa, 0x1d, 0x4c, 0x06, 0xf0],
    [0xf0, 0x6b, 0xb6, 0x01, 0x14, 0x7d, 0xa9, 0x98, 0x50, 0x61, 0x2a, 0xd2, 0xa6],
    [0xa6, 0x2a, 0x13, 0x1a, 0x98, 0x63, 0x14, 0x4c, 0x02, 0x40, 0x7e, 0xf8, 0xca],
    [0xca, 0x14, 0x89, 0x30, 0x98, 0xae, 0x50, 0x2a, 0x8d, 0x60, 0x7e, 0x86, 0xf1],
    [0xf0, 0x14, 0xa1, 0xe6, 0x98, 0x06, 0xb0, 0x4c, 0x06, 0x04, 0x6b, 0xf4, 0x02],
    [0x02, 0x4c, 0x01, 0xc0, 0x2a, 0x81, 0xc8, 0x14, 0x02, 0x0f, 0x98, 0x91, 0x88],
    [0x88, 0x2a, 0x2c, 0xa5, 0x98, 0x87, 0x0a, 0x7e, 0x50, 0x70, 0x4c, 0x01, 0x80],
    [0x80, 0x98, 0xc0, 0xd0, 0x2a, 0x6e, 0x15, 0x4c, 0x01, 0x26, 0x6b, 0xf6, 0x01],
    [0x00, 0x7e, 0x1d, 0x01, 0x98, 0x62, 0x01, 0x4c, 0x0a, 0xf0, 0x14, 0x19, 0xd0],
    [0xd0, 0x4c, 0x03, 0x43, 0x14, 0x71, 0xca, 0x98, 0x3f, 0x81, 0x2a, 0x01, 0xba],
    [0xba, 0x98, 0x72, 0xe6, 0x14, 0x1e, 0x30, 0x4c, 0x01, 0x44, 0x7e, 0xf4, 0xb6],
    [0xb6, 0x14, 0xc3, 0x92, 0x6b, 0x11, 0x06, 0x7e, 0x8c, 0xd1, 0x4c, 0x06, 0xb2],
    [0xb2, 0x4c, 0x01, 0xf0, 0x14, 0x5d, 0xd2, 0x7e, 0xa6, 0x1b, 0x6b, 0x32, 0x03],
    [0x02, 0x4c, 0x02, 0xef, 0x14, 0x41, 0x41, 0x98, 0x5b, 0x1b, 0x2a, 0x4c, 0xd1],
    [0xd0, 0x7e, 0x47, 0x1d, 0x6b, 0x8a, 0x06, 0x98, 0x63, 0x19, 0x14, 0x63, 0x8d],
    [0x8c, 0x14, 0xf0, 0x03, 0x2a, 0x38, 0x75, 0x6b, 0x21, 0x02, 0x4c, 0x09, 0xa6],
    [0xa6, 0x14, 0x04, 0x9c, 0x7e, 0x30, 0x4b, 0x4c, 0x01, 0x1e, 0x2a, 0xb0, 0x1e],
    [0x1e, 0x14, 0x7d, 0xf6, 0x7e, 0x30, 0x64, 0x4c, 0x02, 0x9e, 0x98, 0xb2, 0x05],
    [0x04, 0x98, 0xf4, 0x80, 0x4c, 0x09, 0xfd, 0x2a, 0x53, 0x0c, 0x7e, 0xa0, 0x64],
    [0x64, 0x6b, 0x96, 0x02, 0x7e, 0x58, 0xda, 0x14, 0x63, 0x80, 0x4c, 0x01, 0x72],
    [0x72, 0x4c, 0x02, 0xec, 0x7e, 0x52, 0x7d, 0x98, 0xde, 0xfa, 0x14, 0x11, 0x20],
    [0x20, 0x14, 0x0c, 0x98, 0x6b, 0x1a, 0x0b, 0x2a, 0x80, 0xd0, 0x7e, 0xda, 0xd2],
    [0xd2, 0x98, 0xc2, 0x15, 0x14, 0x0b, 0xd0, 0x7e, 0x32, 0x0f, 0x6b, 0xd9, 0x03],
    [0x02, 0x98, 0xe8, 0xd7, 0x14, 0x13, 0xc4, 0x4c, 0x09, 0x50, 0x7e, 0x90, 0xa2],
    [0xa2, 0x7e, 0x9f, 0x30, 0x14, 0xc5, 0x1a, 0x2a, 0x6a, 0x0b, 0x4c, 0x03, 0xd8],
    [0xd8, 0x14, 0x91, 0x69, 0x2a, 0x9d, 0x11, 0x98, 0xba, 0xf3, 0x4c, 0x07, 0x3e],
    [0x3e, 0x2a, 0x01, 0xe0, 0x7e, 0xc4, 0x13, 0x4c, 0x0b, 0x16, 0x98, 0x83, 0x83],
    [0x82, 0x2a, 0xf4, 0x50, 0x7e, 0x30, 0x9b, 0x4c, 0x0b, 0xd8, 0x14, 0xbf, 0x36],
    [0x36, 0x7e, 0x6e, 0xb5, 0x14, 0xcd, 0xbb, 0x98, 0xbf, 0xf0, 0x4c, 0x0a, 0x3d],
    [0x3c, 0x7e, 0x02, 0x79, 0x4c, 0x0b, 0x9b, 0x98, 0x2d, 0x5e, 0x14, 0xa1, 0x03],
    [0x02, 0x14, 0x35, 0xfe, 0x98, 0x3d, 0xf0, 0x7e, 0x51, 0x81, 0x6b, 0x55, 0x02],
    [0x02, 0x14, 0x84, 0x55, 0x4c, 0x02, 0x36, 0x6b, 0x89, 0x03, 0x98, 0x0c, 0x60],
    [0x60, 0x7e, 0x78, 0xf7, 0x4c, 0x01, 0x90, 0x98, 0xc4, 0xa7, 0x6b, 0x09, 0x02],
    [0x02, 0x98, 0x13, 0xb3, 0x7e, 0x38, 0x34, 0x4c, 0x05, 0x68, 0x14, 0x13, 0xc0],
    [0xc0, 0x4c, 0x07, 0x00, 0x7e, 0x20, 0x2c, 0x2a, 0x0c, 0xd2, 0x6b, 0x8a, 0x0a],
    [0x0a, 0x14, 0xc0, 0x3c, 0x2a, 0x0c, 0x75, 0x7e, 0xb7, 0x3c, 0x4c, 0x09, 0xfd],
    [0xfc, 0x98, 0x03, 0x60, 0x6b, 0x1c, 0x01, 0x7e, 0xf0, 0x01, 0x4c, 0x03, 0x1c],
    [0x1c, 0x2a, 0x31, 0x0c, 0x6b, 0xc1, 0x02, 0x14, 0x01, 0xbe, 0x98, 0x0e, 0xad],
    [0xac, 0x7e, 0x40, 0x0c, 0x6b, 0x07, 0x06, 0x2a, 0x0d, 0xa5, 0x98, 0x8c, 0xf0],
    [0xf0, 0x98, 0xf3, 0xed, 0x6b, 0xa8, 0x07, 0x14, 0x0e, 0xa0, 0x2a, 0x81, 0x94],
    [0x94, 0x2a, 0x0d, 0xd0, 0x7e, 0x48, 0x0e, 0x14, 0xc0, 0x01, 0x98, 0x16, 0x44],
    [0x44, 0x2a, 0x1d, 0xc0, 0x6b, 0x65, 0x09, 0x14, 0xea, 0xc1, 0x7e, 0xde, 0xd0],
    [0xd0, 0x7e, 0x30, 0xb9, 0x14, 0xf3, 0x9c, 0x6b, 0x3e, 0x03, 0x4c, 0x09, 0xc0],
    [0xc0, 0x98, 0xd1, 0xf4, 0x4c, 0x01, 0xa8, 0x6b, 0x15, 0x02, 0x2a, 0x07, 0xe1],
    [0xe0, 0x2a, 0xf7, 0x14, 0x98, 0x60, 0x7b, 0x4c, 0x06, 0xf8, 0x7e, 0x46, 0xfa],
    [0xfa, 0x2a, 0x50, 0x43, 0x14, 0xe8, 0x1e, 0x4c, 0x07, 0xd6, 0x7e, 0x12, 0x4e],
    [0x4e, 0x14, 0x38, 0xc7, 0x2a, 0x61, 0x13, 0x6b, 0xfd, 0x03, 0x4c, 0x06, 0xdc],
    [0xdc, 0x14, 0x10, 0xd0, 0x98, 0xc2, 0x06, 0x2a, 0xf1, 0x01, 0x6b, 0xd1, 0x05],
    [0x04, 0x14, 0x91, 0x35, 0x7e, 0x17, 0x21, 0x2a, 0x01, 0xd0, 0x4c, 0x0a, 0xf0],
    [0xf0, 0x6b, 0x71, 0x01, 0x7e, 0x9f, 0xba, 0x2a, 0xbf, 0x78, 0x4c, 0x05, 0x60],
    [0x60, 0x4c, 0x02, 0x50, 0x6b, 0x2f, 0x0b, 0x2a, 0xa1, 0x02, 0x98, 0x7d, 0x26],
    [0x26, 0x98, 0xa5, 0xd6, 0x14, 0xd1, 0x80, 0x6b, 0x6b, 0x0b, 0x2a, 0xae, 0x36],
    [0x36, 0x98, 0x21, 0x41, 0x7e, 0x02, 0x38, 0x14, 0xc1, 0x80, 0x4c, 0x01, 0x1e],
    [0x1e, 0x7e, 0x80, 0xed, 0x14, 0xd1, 0x98, 0x6b, 0x2c, 0x06, 0x2a, 0x0e, 0x0c],
    [0x0c, 0x14, 0x80, 0x23, 0x6b, 0x4e, 0x0b, 0x2a, 0x51, 0x02, 0x98, 0xce, 0xba],
    [0xba, 0x2a, 0x48, 0x01, 0x6b, 0x18, 0x06, 0x98, 0xc6, 0x1b, 0x4c, 0x07, 0xbe],
    [0xbe, 0x4c, 0x0b, 0x41, 0x6b, 0xd9, 0x03, 0x14, 0x80, 0x1f, 0x2a, 0x31, 0x3e],
    [0x3e, 0x4c, 0x09, 0xc1, 0x7e, 0x39, 0xaf, 0x98, 0x3d, 0x18, 0x14, 0x06, 0x64],
    [0x64, 0x98, 0xbf, 0xd5, 0x14, 0x58, 0x33, 0x4c, 0x02, 0x46, 0x7e, 0x8c, 0x78],
    [0x78, 0x14, 0xfe, 0x1e, 0x7e, 0x15, 0x7e, 0x98, 0x52, 0x80, 0x4c, 0x09, 0x95],
    [0x94, 0x4c, 0x01, 0x68, 0x7e, 0x92, 0x2b, 0x14, 0x4e, 0x41, 0x98, 0x3b, 0x14],
    [0x14, 0x7e, 0xa0, 0x22, 0x98, 0x19, 0x1f, 0x14, 0xbc, 0xc8, 0x4c, 0x02, 0x10],
    [0x10, 0x6b, 0x94, 0x05, 0x4c, 0x06, 0x9f, 0x98, 0xd4, 0x88, 0x7e, 0x91, 0x5b],
    [0x5a, 0x98, 0x1c, 0x6b, 0x2a, 0xb2, 0x84, 0x14, 0xed, 0x59, 0x4c, 0x05, 0x70],
    [0x70, 0x14, 0x06, 0xf0, 0x7e, 0x38, 0xb0, 0x2a, 0x4f, 0xbe, 0x4c, 0x0b, 0xf0],
    [0xf0, 0x14, 0xd0, 0x7d, 0x2a, 0x63, 0xb4, 0x6b, 0x71, 0x03, 0x7e, 0xf1, 0xe9],
    [0xe8, 0x2a, 0x38, 0x20, 0x7e, 0x8a, 0x07, 0x98, 0x63, 0x72, 0x14, 0x01, 0xfc],
    [0xfc, 0x6b, 0xd4, 0x03, 0x4c, 0x02, 0x14, 0x14, 0x07, 0x20, 0x2a, 0xed, 0xb1],
    [0xb0, 0x2a, 0x2a, 0xe9, 0x14, 0x0a, 0xa0, 0x4c, 0x01, 0x58, 0x6b, 0x90, 0x06],
    [0x06, 0x4c, 0x01, 0xa5, 0x7e, 0x3d, 0x6b, 0x14, 0x34, 0x9e, 0x98, 0x40, 0x01],
    [0x00, 0x2a, 0xb0, 0xc9, 0x14, 0x2b, 0x80, 0x98, 0x13, 0xcd, 0x7e, 0xf8, 0x4e],
    [0x4e, 0x2a, 0x02, 0xf9, 0x14, 0x92, 0xff, 0x4c, 0x01, 0x0f, 0x98, 0x20, 0x5e],
    [0x5e, 0x14, 0x1c, 0xf0, 0x6b, 0xc9, 0x01, 0x98, 0x35, 0x91, 0x4c, 0x01, 0xbd],
    [0xbc, 0x4c, 0x06, 0x1d, 0x14, 0xd0, 0xc2, 0x7e, 0x0d, 0x81, 0x6b, 0x66, 0x09],
    [0x08, 0x14, 0xbc, 0x17, 0x4c, 0x03, 0x40, 0x98, 0x7b, 0xf1, 0x2a, 0x0d, 0x5a],
    [0x5a, 0x98, 0x02, 0x8c, 0x7e, 0x86, 0xac, 0x4c, 0x03, 0x1b, 0x2a, 0x21, 0x38],
    [0x38, 0x14, 0xc8, 0x16, 0x4c, 0x01, 0x76, 0x2a, 0x2c, 0x7c, 0x98, 0x10, 0xf0],
    [0xf0, 0x6b, 0x28, 0x06, 0x4c, 0x01, 0x18, 0x98, 0xe8, 0x63, 0x14, 0x9c, 0x18],
    [0x18, 0x14, 0xe0, 0xb9, 0x2a, 0xbf, 0x0c, 0x98, 0x02, 0x30, 0x4c, 0x01, 0x8f],
    [0x8e, 0x14, 0x04, 0x82, 0x2a, 0x15, 0x38, 0x4c, 0x0a, 0xc1, 0x98, 0x64, 0xc3],
    [0xc2, 0x6b, 0x0e, 0x07, 0x14, 0x28, 0x61, 0x4c, 0x01, 0x02, 0x2a, 0x7f, 0xd2],
    [0xd2, 0x14, 0x15, 0x34, 0x2a, 0xae, 0xf2, 0x7e, 0x02, 0x04, 0x4c, 0x01, 0x38],
    [0x38, 0x98, 0x2a, 0x86, 0x6b, 0xe7, 0x01, 0x14, 0x2f, 0x98, 0x2a, 0x06, 0x89],
    [0x88, 0x6b, 0x01, 0x03, 0x98, 0xb2, 0x26, 0x14, 0x28, 0xde, 0x2a, 0x9b, 0x78],
];
