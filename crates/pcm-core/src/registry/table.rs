//! Known operating-system IDs, grouped by service number or custom OS
//! vendor.

use super::OsidGroup;
use crate::profile::PcmType;

pub(super) static OSID_GROUPS: &[OsidGroup] = &[
    // LB7 Duramax, EFILive custom OS
    OsidGroup {
        hardware: PcmType::E54,
        description: Some("E54 LB7 EFILive COS"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            1337601, 1710001, 1887301, 2444101, 2600601, 2685301, 3904401, 1337605,
            1710005, 1887305, 2444105, 2600605, 2685305, 3904405,
        ],
    },
    // LB7 Duramax, service number 9388505
    OsidGroup {
        hardware: PcmType::E54,
        description: Some("E54 Service No 9388505"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            15063376, 15188873, 15097100,
        ],
    },
    // LB7 Duramax, service number 12210729
    OsidGroup {
        hardware: PcmType::E54,
        description: Some("E54 Service No 12210729"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            15085499, 15094441, 15166853, 15186006, 15189044,
        ],
    },
    // LLY Duramax, service number 12244189
    OsidGroup {
        hardware: PcmType::E60,
        description: Some("E60 Service No 12244189"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            15141668, 15193885, 15228758, 15231599, 15231600, 15879103, 15087230,
        ],
    },
    // LLY Duramax, EFILive custom OS
    OsidGroup {
        hardware: PcmType::E60,
        description: Some("LLY EFILive COS"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            4166801, 4166805, 5160001, 5160005, 5388501, 5388505, 5875801, 5875805,
        ],
    },
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("VCM Suite 2 Bar"),
        key_algorithm: Some(3),
        image_size: None,
        osids: &[
            1251001,
        ],
    },
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("VCM Suite 3 Bar"),
        key_algorithm: Some(4),
        image_size: None,
        osids: &[
            1261001,
        ],
    },
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("VCM Suite Mafless"),
        key_algorithm: Some(5),
        image_size: None,
        osids: &[
            1271001,
        ],
    },
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("VCM Suite MAF RTT"),
        key_algorithm: Some(6),
        image_size: None,
        osids: &[
            1281001,
        ],
    },
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("VCM Suite Mafless"),
        key_algorithm: Some(7),
        image_size: None,
        osids: &[
            1271002,
        ],
    },
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("VCM Suite 2 Bar"),
        key_algorithm: Some(8),
        image_size: None,
        osids: &[
            1251002,
        ],
    },
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("VCM Suite MAF RTT"),
        key_algorithm: Some(9),
        image_size: None,
        osids: &[
            1261002,
        ],
    },
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("VCM Suite 3 Bar"),
        key_algorithm: Some(10),
        image_size: None,
        osids: &[
            1281002,
        ],
    },
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("VCM Suite Mafless"),
        key_algorithm: Some(11),
        image_size: None,
        osids: &[
            1271003,
        ],
    },
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("VCM Suite 2 Bar"),
        key_algorithm: Some(12),
        image_size: None,
        osids: &[
            1251003,
        ],
    },
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("VCM Suite 3 Bar"),
        key_algorithm: Some(13),
        image_size: None,
        osids: &[
            1261003,
        ],
    },
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("VCM Suite MAF RTT"),
        key_algorithm: Some(14),
        image_size: None,
        osids: &[
            1281003,
        ],
    },
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("VCM Suite COS 1M"),
        key_algorithm: Some(40),
        image_size: Some(0x100000),
        osids: &[
            1273057,
        ],
    },
    // HP Tuners custom OS
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("Unknown VCM Suite COS"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            1250013, 1250018, 1251005, 1251006, 1251008, 1251010, 1251011, 1251012,
            1251014, 1251016, 1251017, 1260006, 1260011, 1261005, 1261008, 1261014,
            1261016, 1270013, 1270017, 1271005, 1271006, 1271008, 1271010, 1271011,
            1271012, 1271014, 1271016, 1271018, 1281005, 1281006, 1281008, 1281010,
            1281011, 1281012, 1281014, 1281016, 1281918,
        ],
    },
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("P59a Hybrid Service No 12583560"),
        key_algorithm: None,
        image_size: Some(0x100000),
        osids: &[
            12590777,
        ],
    },
    // Service number 9354896
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("P01 Service No 9354896"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            9360360, 9360361, 9361140, 9363996, 9365637, 9373372, 9379910, 9381344,
            12205612, 12584929, 12593359, 12597506, 16253027,
        ],
    },
    // Service number 12200411
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("P01 Service No 12200411"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            12202088, 12206871, 12208322, 12209203, 12212156, 12216125, 12221588, 12225074,
            12593358,
        ],
    },
    // EFILive custom OS
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("P01 EFI Live COS"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            1250001, 1290001, 2020002, 2040001, 3150002, 4072901, 4073101, 4110003,
            5120003, 1250002, 1290002, 2020003, 2040002, 3150003, 4072902, 4073102,
            4140001, 1250003, 1290003, 2020005, 2040003, 3170001, 4072903, 4073103,
            4140002, 1270001, 1290005, 2030001, 3110001, 3190001, 4073001, 4080001,
            4140003, 1270002, 2010001, 2030002, 3130001, 3190002, 4073002, 4110001,
            5120001, 1270003, 2020001, 2030003, 3150001, 3190003, 4073003, 4110002,
            5120002,
        ],
    },
    // 1Mb P59, service number 12589463
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("P59 Service No 12589463"),
        key_algorithm: None,
        image_size: Some(0x100000),
        osids: &[
            12591725, 12592618, 12593555, 12606961, 12612115,
        ],
    },
    // Service number 12586242
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("P59 Service No 12586242"),
        key_algorithm: None,
        image_size: Some(0x100000),
        osids: &[
            12564440, 12585950, 12588804, 12592425, 12592433, 12606960, 12612114,
        ],
    },
    // Service number 12586243
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("P59 Service No 12586243"),
        key_algorithm: None,
        image_size: Some(0x100000),
        osids: &[
            12587603, 12587604, 76030003, 76030004, 76030005, 76030006, 76030007, 76030008,
            76030009,
        ],
    },
    // Service number 12582605
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("P59 Service No 12582605"),
        key_algorithm: None,
        image_size: Some(0x100000),
        osids: &[
            12578128, 12579405, 12580055, 12593058,
        ],
    },
    // Service number 12582811
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("P59 Service No 12582811"),
        key_algorithm: None,
        image_size: Some(0x100000),
        osids: &[
            12587811, 12605114, 12606807, 12608669, 12613245, 12613246, 12613247, 12619623,
        ],
    },
    // Service number 12602802
    OsidGroup {
        hardware: PcmType::P01_P59,
        description: Some("P59 Service No 12602802"),
        key_algorithm: None,
        image_size: Some(0x100000),
        osids: &[
            12597120, 12613248, 12619624,
        ],
    },
    // 96/97 Vortec Black Box, unsupported 5-connector generation
    OsidGroup {
        hardware: PcmType::Undefined,
        description: Some("Vortec Black Box 96/97, 5 Connector, Service No 16244210 (unsupported)"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            9378495, 16187577, 16227245, 16232915, 16235505, 16237015, 16256445,
        ],
    },
    // Service number 9366810
    OsidGroup {
        hardware: PcmType::BlackBox,
        description: Some("Vortec Black Box 98/99 Service No 9366810"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            9355699, 9365095, 16263425,
        ],
    },
    // Service number 16263494
    OsidGroup {
        hardware: PcmType::BlackBox,
        description: Some("Vortec Black Box 98-02, 4 Plug, Service No 16263494"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            9360505, 9365085, 9384185, 16251315, 16265175,
        ],
    },
    // 1996-1998 V8, service number 16238212, not flashable over VPW
    OsidGroup {
        hardware: PcmType::Undefined,
        description: Some("1997, 1998 LS1 Corvette, Camaro, Firebird"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            9350054, 9350490, 9350494, 9350496, 9350497, 9352141, 9352151, 9352161,
            9352171, 9352201, 9352221, 9352231, 9352241, 9352251, 9352261, 9352271,
            9352281, 9352291, 9352311, 9352321, 9352641, 9352651, 9354201, 9354735,
            9354736, 9354737, 9354738, 9354739, 9354740, 9355161, 9355162, 9355166,
            9355171, 9355181, 9355191, 9355201, 9355211, 9355221, 9355231, 9359652,
            9359661, 9365931, 9365941, 9365951, 9365961, 9365981, 9366221, 9369651,
            9375571, 9375572, 9375573, 9375574, 9375575, 9375576, 9375577, 9375578,
            9375579, 9375581, 9375582, 9375583, 9375584, 9375585, 9375591, 9375601,
            9375611, 9375621, 9375631, 9375641, 9375651, 9384530, 9384532, 9384535,
            9384537, 9384538, 9384539, 9384540, 9384542, 9384545, 9384547, 9384548,
            9384549, 9384550, 9384557, 9384558, 9384562, 9384569, 9384575, 9384578,
            9384584, 9384585, 9384587, 9384588, 9384589, 9384590, 9384592, 9393822,
            12480112, 12593456, 12593457, 12593458, 12593459, 12593460, 12596953, 12596954,
            12596955, 12596956, 16238127, 16238234, 16238242, 16238297, 16238302, 16238303,
            16238352, 16238353, 16238354, 16238356, 16238357, 16238360, 16238362, 16244351,
            16244371, 16244391, 16255801, 16256470, 16256510, 16256512, 16256514, 16256515,
            16256516, 16256520, 16256523, 16256525, 16256908, 16264963, 16264964, 16264966,
            16265756, 16266578, 16266579, 16266580, 16266582, 16266583, 16266585, 16267006,
            16267014, 16267957, 16267958, 16267959, 16267960, 16267962, 16267963, 16267964,
            16267965, 16267966, 16267967, 16267968, 16267969, 16268315, 16268316, 16268317,
            16268319, 16268320, 16268474, 22480054, 42480054,
        ],
    },
    // Service number 16207326, 256Kb
    OsidGroup {
        hardware: PcmType::P04_Early,
        description: Some("P04 Early 256KiB Service No 16207326"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            9352140, 9352142, 9352143, 9352146, 9352149, 9352150, 9352340, 9352342,
            9352346, 9352347, 9352553, 9354241, 9354242, 9355430, 9355433, 9355435,
            9365005, 9365007, 9365012, 9365017, 9365650, 9365651, 9365652, 9365655,
            9367092, 16210002, 16210010, 16219361, 16219368, 16226502, 16227925, 16230131,
            16230375, 16230378, 16230380, 16230383, 16230385, 16231872, 16231877, 16231889,
            16231890, 16231940, 16231941, 16232010, 16232466, 16232477, 16233470, 16233471,
            16233472, 16233478, 16234097, 16234124, 16234438, 16234440, 16234441, 16234751,
            16235667, 16238373, 16238443, 16238446, 16238447, 16238448, 16238450, 16238452,
            16238453, 16238456, 16238457, 16238458, 16238517, 16238518, 16238519, 16238520,
            16238523, 16238525, 16238532, 16238533, 16240637, 16241229, 16245321, 16246063,
            16246066, 16249992, 16249995, 16251203, 16251205, 16251975, 16257917, 16257918,
            16257922, 16257926, 16257935, 16257936, 16257937, 16257938, 16257940, 16257942,
            16257947, 16257950, 16257952, 16257953, 16257955, 16257956,
        ],
    },
    // Service numbers 16207326 and 16217058, 512Kb
    OsidGroup {
        hardware: PcmType::P04_Early,
        description: Some("P04 Early 512KiB Service No 16207326 or 16217058"),
        key_algorithm: Some(6),
        image_size: Some(0x80000),
        osids: &[
            16257963, 16257965, 16257966, 16259008, 16259012, 16259016, 16259018, 16259195,
            16259652, 16259654, 16259659, 16259660, 16259664, 16259666, 16259667, 16259669,
            16259670, 16259672, 16259676, 16259677, 16259682, 16259686, 16259687, 16259688,
            16259694, 16259696, 16259697, 16259698, 16259702, 16259704, 16259705, 16259708,
            16259710, 16259712, 16259714, 16259715, 16259716, 16259717, 16259720, 16259906,
            16265837, 16266038, 16266902, 16268480, 16268483, 16268485, 16268488, 24233869,
            24233870, 24234035, 24234036, 24234037, 24234038, 28004945, 28029988, 93802333,
            93802334,
        ],
    },
    // Service number 16227797, 512Kb
    OsidGroup {
        hardware: PcmType::P04_Early,
        description: Some("P04 Early 512KiB Service No 16227797"),
        key_algorithm: None,
        image_size: Some(0x80000),
        osids: &[
            16252952, 9350560, 9355202, 9355203, 9355205, 9355206, 9355207, 9355208,
            9355440, 9355441, 9355443, 9355445, 9355488, 9355496, 9355497, 9355498,
            9355503, 9355506, 9359551, 9359552, 9359553, 9359555, 9359556, 9359557,
            9359635, 9359636, 9359757, 9359758, 9359760, 9359762, 9362998, 9363007,
            9363080, 9363082, 9363090, 9363091, 9363101, 9363102, 9363104, 9363106,
            9363107, 9363108, 9363110, 9363381, 9364942, 9364943, 9364945, 9364967,
            9364968, 9364972, 9364975, 9364977, 9364978, 9365041, 9365077, 9365078,
            9365081, 9365088, 9365091, 9365092, 9365093, 9365096, 9365097, 9365281,
            9365282, 9365287, 9365302, 9365304, 9365308, 9365310, 9365311, 9365314,
            9365316, 9365340, 9365341, 9365342, 9365346, 9365347, 9365348, 9365350,
            9365351, 9365355, 9365356, 9365357, 9365358, 9365360, 9383352, 12201561,
            16221445, 16231196, 16231303, 16231321, 16234305, 16235290, 16242720, 16243381,
            16243385, 16243643, 16243648, 16243817, 16243821, 16243822, 16243823, 16243826,
            16243827, 16244313, 16244314, 16244316, 16244317, 16244318, 16244323, 16244324,
            16244906, 16245158, 16245167, 16245315, 16245318, 16245478, 16245480, 16245670,
            16248316, 16248320, 16251789, 16252225, 16252227, 16252720, 16252943, 16252946,
            16252951, 16252955, 16252956, 16252957, 16252958, 16252960, 16252961, 16252962,
            16252963, 16252965, 16252966, 16253035, 16254062, 16254063, 16254333, 16254337,
            16254467, 16254468, 16254712, 16254718, 16254720, 16255967, 16257407, 16257531,
            16257532, 16257533, 16257536, 16257537, 16257725, 16257726,
        ],
    },
    // Service number 9374997
    OsidGroup {
        hardware: PcmType::P04,
        description: Some("P04 512KiB Service No 9374997 (algo 14)"),
        key_algorithm: Some(14),
        image_size: None,
        osids: &[
            9355672, 9356706, 9357008, 9357010, 9363226, 9365170, 9365972, 9365973,
            9365977, 9365978, 9365983, 9365986, 9366308, 9366310, 9366315, 9366318,
            9367318, 9367321, 9367398, 9367515, 9367516, 9367752, 9367753, 9367757,
            9367758, 9367767, 9367772, 9368196, 9369225, 9369227, 9369228, 9369229,
            9369230, 9369231, 9369232, 9369252, 9369308, 9369309, 9369311, 9369312,
            9369319, 9369320, 9369321, 9369326, 9369395, 9369396, 9370627, 9370635,
            9370688, 9370700, 9371626, 9371627, 9371628, 9372327, 9372328, 9372332,
            9372357, 9372358, 9372360, 9372361, 9372362, 9372363, 9372465, 9372466,
            9372474, 9372477, 9373168, 9373171, 9373175, 9373176, 9373181, 9373182,
            9373184, 9373962, 9374336, 9374337, 9374338, 9374625, 9374628, 9375070,
            9375073, 9375118, 9376661, 9376662, 9376663, 9377380, 9377381, 9377385,
            9377388, 9377389, 9377390, 9377391, 9377392, 9377399, 9377525, 9377542,
            9377739, 9378063, 9378065, 9378067, 9378068, 9378070, 9378072, 9378075,
            9378076, 9378077, 9379115, 9379116, 9379117, 9379123, 9379126, 9379128,
            9379427, 9379492, 9379603, 9379805, 9379806, 9382210, 9382460, 9382915,
            9382916, 9382918, 9382920, 9382926, 9382950, 9382951, 9382956, 9383066,
            9383068, 9383074, 9383079, 9383081, 9383084, 9383086, 9383087, 9383088,
            9383089, 9383091, 9386582, 9386586, 12214377, 12214379, 16241831, 16241840,
            16242217, 16242228, 16242233, 16242236, 16243026, 16255667, 16255675, 16255677,
            16255680, 16255681, 16255794, 16256047, 16257159, 16257165, 16257166, 16257169,
            16257171,
        ],
    },
    // Service number 9380717
    OsidGroup {
        hardware: PcmType::P04,
        description: Some("P04 Service No 9380717"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            9354406, 9356245, 9356247, 9356248, 9356251, 9356252, 9356253, 9356256,
            9356258, 9363607, 9363608, 9364123, 9364125, 9364126, 9364127, 9374398,
            9374402, 9377336, 9380138, 9380140, 9380718, 9380973, 9381748, 9381752,
            9381754, 9381776, 9381796, 9381797, 9381798, 9381815, 9382558, 9382562,
            9382566, 9382572, 9382728, 9382729, 9382730, 9384010, 9384011, 9384012,
            9384013, 9384015, 9384017, 9384018, 9384020, 9384022, 9384023, 9384027,
            9384028, 9384033, 9384035, 9384036, 9384042, 9384043, 9384046, 9384047,
            9384048, 9384050, 9384051, 9384052, 9384053, 9384073, 9384075, 9384434,
            9384436, 9384437, 9384438, 9384441, 9384442, 9384457, 9384458, 9384462,
            9384464, 9384465, 9384467, 9384471, 9384473, 9384477, 9386283, 9386285,
            9386286, 9386287, 9386288, 9386289, 9387045, 9387047, 9387048, 9387112,
            9389253, 9389256, 9389257, 9389258, 9389259, 9389260, 9389282, 9389283,
            9389339, 9389341, 9389343, 9389346, 9389348, 9389349, 9389352, 9389356,
            9389397, 9389666, 9389667, 9389668, 9389670, 9389676, 9389679, 9389687,
            9389688, 9389692, 9389695, 9389708, 9389750, 9389752, 9389759, 9389760,
            9389761, 9389766, 9389767, 9389769, 9389770, 9389909, 9390172, 9390758,
            9390763, 9390765, 9391248, 9392594, 9392748, 9392786, 9392787, 9392790,
            9392791, 9392794, 9392797, 9392798, 9392800, 9392801, 9392802, 9392804,
            9392807, 9393295, 9393297, 9393300, 9393302, 9393307, 9393309, 9393313,
            9393315, 9393580, 9393581, 9393598, 9393608, 9393613, 9393832, 9393898,
            9393901, 10384528, 10384529, 12201457, 12201458, 12201460, 12201461, 12201462,
            12201463, 12201465, 12201466, 12201467, 12201468, 12201687, 12201772, 12201779,
            12201782, 12201783, 12201785, 12201786, 12201787, 12201788, 12201791, 12201792,
            12201793, 12201795, 12201796, 12201797, 12201803, 12201822, 12201829, 12201830,
            12201840, 12201850, 12201862, 12201863, 12201865, 12201866, 12201867, 12201868,
            12201875, 12201876, 12201877, 12201878, 12201879, 12201881, 12201885, 12201886,
            12201887, 12201888, 12201889, 12201891, 12202127, 12202129, 12202133, 12202135,
            12202155, 12202881, 12202882, 12202885, 12202941, 12202942, 12202945, 12203016,
            12203657, 12203659, 12203661, 12203792, 12203793, 12203795, 12203796, 12203797,
            12203798, 12203799, 12203800, 12203801, 12203802, 12203803, 12203805, 12204282,
            12204287, 12204288, 12204290, 12204437, 12204438, 12204439, 12205378, 12205379,
            12211882, 12211883, 12214055, 12214056, 12214057, 12214058, 12214381, 12214391,
            12214436, 12214710, 12214711, 12214712, 12214713, 12215038, 12215040, 12215321,
            12215452, 12220113, 12220115, 12220117, 12220118, 12221087, 12221090, 12221092,
            12221098, 12221101, 12221111, 12221112, 12582150, 12582151, 12582152, 12582153,
            12583164, 16242202, 16243034, 16258875,
        ],
    },
    // Service number 12209624
    OsidGroup {
        hardware: PcmType::P04,
        description: Some("P04 Service No 12209624"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            9354438, 9354966, 9354967, 9361336, 9361343, 9361346, 9361352, 9361362,
            9361387, 9361393, 9361397, 9387282, 9387290, 9387291, 9387292, 9387295,
            9387297, 9387301, 9387307, 9387318, 9387320, 9387322, 9387324, 9387327,
            9387333, 9387337, 9387341, 9387343, 9387346, 9387555, 9387884, 9388994,
            9388997, 9388999, 9389017, 9389020, 9389022, 9389026, 9389028, 9390701,
            9390703, 12200755, 12200756, 12200757, 12200760, 12200775, 12201137, 12201205,
            12201206, 12202879, 12203285, 12203945, 12203948, 12204628, 12205246, 12205248,
            12205275, 12205278, 12205280, 12205283, 12205310, 12205311, 12205317, 12205325,
            12205330, 12205333, 12205335, 12205340, 12205341, 12205345, 12205348, 12205381,
            12205382, 12205551, 12205555, 12205556, 12205560, 12205924, 12206000, 12206007,
            12206011, 12206017, 12206018, 12206021, 12206022, 12206024, 12206031, 12206035,
            12206036, 12206037, 12206038, 12206039, 12206040, 12206041, 12206046, 12206048,
            12206050, 12206052, 12206055, 12206057, 12206438, 12207406, 12207408, 12207409,
            12207412, 12207413, 12207415, 12207417, 12207419, 12207420, 12207421, 12207422,
            12207423, 12207428, 12207429, 12207431, 12207432, 12207433, 12207436, 12207438,
            12207606, 12207787, 12207859, 12207862, 12207868, 12207872, 12207873, 12207879,
            12208155, 12208157, 12208326, 12208327, 12208328, 12208330, 12208331, 12208332,
            12208528, 12208532, 12208534, 12208537, 12208762, 12208775, 12209445, 12209446,
            12209447, 12209448, 12209450, 12210253, 12210255, 12210258, 12210261, 12211252,
            12211256, 12211448, 12211451, 12211452, 12211455, 12211457, 12211460, 12211461,
            12211462, 12211463, 12211465, 12211466, 12211467, 12211468, 12211471, 12211472,
            12211473, 12211475, 12211476, 12211477, 12211478, 12211480, 12211481, 12211486,
            12211487, 12211488, 12211490, 12211491, 12211492, 12211493, 12211495, 12211496,
            12211497, 12211498, 12211500, 12211501, 12211502, 12211503, 12211505, 12211511,
            12211721, 12211723, 12212430, 12213451, 12213452, 12213486, 12213488, 12213496,
            12213497, 12213502, 12214060, 12214061, 12214062, 12214063, 12214066, 12214422,
            12214425, 12214427, 12215591, 12215592, 12215596, 12215600, 12215601, 12215602,
            12215605, 12215608, 12215884, 12215887, 12216128, 12216129, 12216136, 12216186,
            12216490, 12216522, 12216524, 12216566, 12216567, 12216568, 12216625, 12216640,
            12217063, 12217065, 12217066, 12217150, 12217151, 12217152, 12217153, 12217155,
            12217156, 12217157, 12217158, 12217159, 12217725, 12217997, 12217998, 12217999,
            12218171, 12218172, 12218396, 12218397, 12218398, 12218399, 12218400, 12218402,
            12218403, 12218405, 12218406, 12218407, 12218408, 12218409, 12218410, 12218411,
            12218838, 12218840, 12218841, 12218842, 12218843, 12218845, 12218850, 12218851,
            12218852, 12218853, 12218855, 12218859, 12218861, 12218862, 12218863, 12218865,
            12218866, 12219150, 12219182, 12219184, 12219185, 12219186, 12219273, 12219275,
            12219350, 12219351, 12221347, 12221348, 12221665, 12221666, 12221667, 12221668,
            12221669, 12221670, 12221671, 12221672, 12221673, 12221675, 12221676, 12221677,
            12221678, 12221679, 12221680, 12221681, 12221682, 12221683, 12221685, 12221686,
            12221687, 12221688, 12221716, 12221717, 12221718, 12221720, 12221721, 12221722,
            12221723, 12221725, 12221727, 12221728, 12221730, 12221731, 12221732, 12221733,
            12222102, 12222104, 12222106, 12222107, 12222108, 12222121, 12222122, 12222124,
            12222125, 12222126, 12222127, 12222130, 12222131, 12222132, 12222135, 12222446,
            12222447, 12223042, 12223435, 12223436, 12223437, 12223438, 12223440, 12223441,
            12223442, 12223443, 12223445, 12223446, 12223447, 12223448, 12223450, 12223451,
            12223452, 12223453, 12223455, 12223456, 12223457, 12223458, 12223461, 12223462,
            12223463, 12223465, 12223466, 12223476, 12223477, 12223478, 12223479, 12223480,
            12223481, 12223482, 12223483, 12223485, 12223486, 12223487, 12223488, 12223489,
            12223490, 12223491, 12223492, 12223493, 12223495, 12223496, 12223497, 12224907,
            12224908, 12224911, 12224912, 12225135, 12225136, 12225137, 12225336, 12225337,
            12225339, 12225341, 12225342, 12225344, 12225345, 12225346, 12226103, 12226105,
            12226106, 12226107, 12226747, 12226748, 12227240, 12227495, 12227496, 12227671,
            12228140, 12228141, 12228142, 12243363, 12248764, 12571887, 12571888, 12571889,
            12571890, 12571891, 12571892, 12571893, 12571894, 12576146, 12576196, 12578497,
            12578498, 12578500, 12578847, 12578848, 12578849, 12578851, 12578852, 12578875,
            12578876, 12578877, 12578878, 12578904, 12578905, 12579862, 12580025, 12580026,
            12580028, 12580030, 12580031, 12580032, 12580033, 12580048, 12580049, 12580050,
            12580051, 12580052, 12580524, 12580525, 12580526, 12581460, 12581461, 12581463,
            12581464, 12581465, 12581466, 12581467, 12581468, 12581469, 12581470, 12581471,
            12581506, 12583478, 12583479, 12583589, 12583590, 12583591, 12583592, 12583655,
            12583710, 12583711, 12583754, 12583756, 12583759, 12583761, 12583762, 12583763,
            12583770, 12583780, 12583781, 12583782, 12583783, 12583784, 12583785, 12583786,
            12583787, 12584714, 12584716, 12584720, 12586810, 12586811, 12586812, 12586813,
            12586814, 12586815, 12586816, 12586817, 12586818, 12586819, 12586820, 12586821,
            12586822, 12586823, 12586824, 12586825, 12586826, 12586827, 12586828, 12586829,
            12586830, 12586831, 12586832, 12586833, 12586834, 12586835, 12586836, 12586837,
            12586838, 12588234, 12588235, 12588932, 12588938, 12588939, 12588941, 12589089,
            12589141, 12589145, 12589512, 12589513, 12589514,
        ],
    },
    // Service number 12583826
    OsidGroup {
        hardware: PcmType::P04,
        description: Some("P04 Service No 12583826"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            12573213, 12573215, 12573219, 12573286, 12573290, 12573292, 12574547, 12574550,
            12574552, 12577455, 12577456, 12577457, 12578504, 12579928, 12580118, 12580122,
            12580123, 12580124, 12580125, 12580146, 12580147, 12580149, 12580150, 12580151,
            12580152, 12581386, 12581387, 12581388, 12583340, 12583341, 12583343, 12583370,
            12583373, 12583374, 12583375, 12583379, 12583380, 12583381, 12583382, 12583394,
            12583396, 12583431, 12583432, 12583433, 12583434, 12583435, 12583436, 12583441,
            12583442, 12587897, 12587899, 12587900, 12587901, 12587902, 12587903, 12587904,
            12587905, 12588072, 12590901, 12590902, 12596205, 12596206, 12596207, 12596208,
            12596209, 12596210, 12596211, 12596212, 12596213, 12596260, 12596261, 12596441,
            12596631, 12596957, 12596958, 12596959, 12596960, 12597689, 12597690, 12598451,
            12598452, 12598453, 12598564, 12598565, 12598583, 12598584, 12598587, 12598588,
            12598589,
        ],
    },
    // Service number 12583827
    OsidGroup {
        hardware: PcmType::P04,
        description: Some("P04 Service No 12583827"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            12207875, 12579927, 12579929, 12579931, 12580134, 12580139, 12580141, 12580143,
            12580144, 12581052, 12583338, 12583339, 12583342, 12583369, 12584933, 12584938,
            12584939, 12585032, 12585034, 12585045, 12585047, 12585048, 12585050, 12585051,
            12585053, 12585054, 12585087, 12585089, 12585090, 12585091, 12585093, 12585094,
            12585095, 12585096, 12585097, 12585098, 12585133, 12585134, 12586386, 12586387,
            12586587, 12586930, 12586931, 12586953, 12586954, 12587009, 12587545, 12587658,
            12587799, 12587800, 12587801, 12587802, 12587803, 12587804, 12587898, 12588115,
            12588500, 12589761, 12589762, 12589763, 12590900, 12592109, 12592110, 12592111,
            12592112, 12592113, 12592114, 12592115, 12592116, 12592117, 12592638, 12592639,
            12592640, 12593461, 12593462, 12593463, 12593468, 12593469, 12593470, 12593523,
            12593525, 12593819, 12593820, 12593821, 12593822, 12594004, 12594005, 12594008,
            12594017, 12594020, 12594194, 12594195, 12594196, 12594314, 12594316, 12594382,
            12594385, 12594386, 12594527, 12594528, 12594529, 12594532, 12594535, 12594541,
            12594542, 12594548, 12594550, 12598601, 12598602, 12598603, 12598604, 12600188,
            12600189, 12600190, 12600191, 12600192, 12600193, 12600777, 12602858, 12602859,
            12603032, 12618852, 12618855, 12618856, 12618857, 12618860, 12618861, 12618862,
            12618864, 12618865, 12618867, 12618868, 12618869, 12618873, 12618875, 12618876,
            12618878, 12618879, 12618883, 12618885, 12618892, 12618893, 12618894, 12618895,
            15285380, 15286085, 15286245, 15292691,
        ],
    },
    // Service number 16236757
    OsidGroup {
        hardware: PcmType::P04,
        description: Some("P04 Service No 16236757"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            9351345, 9351352, 9351357, 9351362, 9351398, 9351408, 9351412, 9352072,
            9352613, 9352617, 9352676, 9352680, 9352682, 9352697, 9352701, 9352731,
            9352732, 9352737, 9352738, 9352739, 9352741, 9352742, 9352743, 9352746,
            9352747, 9352748, 9352750, 9352751, 9352752, 9352757, 9352758, 9352762,
            9352766, 9352771, 9352797, 9352799, 9352800, 9352801, 9352802, 9352803,
            9352806, 9352807, 9352808, 9352809, 9352820, 9352822, 9352823, 9352826,
            9352827, 9352828, 9353084, 9353151, 9353162, 9353166, 9353692, 9353694,
            9353708, 9353711, 9353712, 9353714, 9353726, 9353728, 9353731, 9354147,
            9356708, 9357027, 9357035, 9357127, 9357128, 9357130, 9357132, 9357155,
            9357156, 9361236, 9361281, 9361291, 9361300, 9364326, 9364356, 9364357,
            9364358, 9364360, 9364361, 9364368, 9364369, 9364371, 9365036, 9365037,
            9367747, 9369193, 9369195, 9369196, 9369197, 9369392, 9369403, 9369407,
            9369995, 9370646, 9370647, 9370648, 9370650, 9373897, 9374770, 9374773,
            9374775, 9374785, 9374787, 9374788, 9374790, 9374958, 9374960, 9374962,
            9374963, 9374965, 9374966, 9376743, 9376746, 9376747, 9376748, 9376752,
            9377382, 9377383, 9377740, 9378498, 9379775, 9379778, 9379781, 9379787,
            9379790, 9379793, 9379796, 9379798, 9379800, 9379801, 9379802, 9379808,
            9379811, 9379813, 9382735, 9382770, 9384498, 9384500, 9384502, 9384505,
            9384516, 9384517, 9384519, 9384786, 9384787, 9386157, 9386447, 9386448,
            9386577, 9386578, 9386580, 9386583, 9389403, 9389716, 9389753, 12201445,
            12201470, 12202132, 12210352, 12210353, 12214378, 12214380, 16236745, 16236748,
            16236749, 16237036, 16237042, 16237082, 16237089, 16237209, 16242757, 16265087,
            16265088, 16265090, 16265091, 16266322, 16266323, 16266326, 16266327, 16266339,
            16266346, 16266348, 16266352, 16266358, 16266360, 16266366, 16266368, 16266373,
            16266375, 16266376, 16266449, 16267124, 16267127, 16267128, 16267132, 16267134,
            16267137, 16267138, 16267142, 16267144, 16267146, 16267147, 16267148, 16267150,
            16267154, 16267156, 16267157, 16267158, 16267160, 16267162, 16268296, 16268297,
            16268300, 16268407, 49807546,
        ],
    },
    // Service number 9356249
    OsidGroup {
        hardware: PcmType::P08,
        description: Some("P08 Service No 9356249"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            9364970, 12206029, 12206044, 12208154, 12208156, 12208773, 12216489, 12216571,
            12221096, 12222128, 12222134, 16257436,
        ],
    },
    // Service number 12202203
    OsidGroup {
        hardware: PcmType::P08,
        description: Some("P08 Service No 12202203"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            9392792, 9392795, 9392796, 12201233, 12205552, 12223041, 12223044, 12223046,
            12225338, 12225340, 12571886, 12580027, 12580029,
        ],
    },
    // Service number 12605873
    OsidGroup {
        hardware: PcmType::P08,
        description: Some("P08 Service No 12605873"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            12604676, 12607442, 12608370, 12610013, 12611951,
        ],
    },
    // Service number 16228016
    OsidGroup {
        hardware: PcmType::P08,
        description: Some("P08 Service No 16228016"),
        key_algorithm: None,
        image_size: None,
        osids: &[
            9351310, 9353727, 9364359, 9364362, 9364367, 9364370, 9364966, 9364974,
            9364976, 9365280, 9365284, 9365286, 9365312, 9365338, 9374332, 9374334,
            9383061, 9383064, 9383067, 9383076, 9387885, 12222105, 16254764, 16259649,
            16259657, 16259674, 16259706, 16259718,
        ],
    },
    OsidGroup {
        hardware: PcmType::P10,
        description: None,
        key_algorithm: None,
        image_size: None,
        osids: &[
            12213305, 12571911, 12575262, 12577956, 12579238, 12579357, 12584138, 12584594,
            12587430, 12587608, 12588012, 12589825, 12590965, 12595726, 12597031, 12623317,
        ],
    },
    OsidGroup {
        hardware: PcmType::P12,
        description: None,
        key_algorithm: None,
        image_size: None,
        osids: &[
            12587007, 12588651, 12589166, 12589312, 12589586, 12592070, 12593533, 12596925,
            12597778, 12597978, 12598275, 12598284, 12601321, 12601774, 12601904, 12605256,
            12605261, 12610624, 12610641, 12610642, 12610643, 12610644, 12610645, 12623279,
            12627882, 12627884, 12631085, 12604440, 12606400, 12606374, 12606375, 12627883,
        ],
    },
    // 2Mb P12b
    OsidGroup {
        hardware: PcmType::P12,
        description: Some("P12b (2Mb)"),
        key_algorithm: None,
        image_size: Some(0x200000),
        osids: &[
            12609805, 12611642, 12613422, 12618164, 12627885,
        ],
    },
];
