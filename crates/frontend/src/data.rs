//! Built-in points of interest and historical eras.
//!
//! Supplied to the engine as pre-loaded structures; nothing here is fetched
//! or parsed at runtime.

use loudi_shared::models::{Era, EraGroup, LatLng, Spot};

fn spot(
    name: &str,
    lat: f64,
    lng: f64,
    area: &str,
    tags: &[&str],
    desc: &str,
    icon: &str,
) -> Spot {
    Spot {
        name: name.to_string(),
        lat,
        lng,
        area: area.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        desc: desc.to_string(),
        icon: icon.to_string(),
        image: None,
    }
}

fn group(name: &str, color: &str, members: &[&str], lat: f64, lng: f64, zoom: f64) -> EraGroup {
    EraGroup {
        name: name.to_string(),
        color: color.to_string(),
        members: members.iter().map(|m| m.to_string()).collect(),
        center: LatLng::new(lat, lng),
        zoom,
    }
}

pub fn spots() -> Vec<Spot> {
    vec![
        spot(
            "梅山龙宫",
            27.9731,
            111.1233,
            "新化县",
            &["自然"],
            "亚洲最长的地下溶洞暗河之一，九重洞府层层相叠，暗河可行船两千余米。",
            "🏞️",
        ),
        spot(
            "紫鹊界梯田",
            27.6722,
            110.9639,
            "新化县",
            &["自然", "人文"],
            "起于先秦的八万亩山地梯田，依靠基岩裂隙水自流灌溉，不塘不坝两千年。",
            "🌾",
        ),
        spot(
            "大熊山国家森林公园",
            28.0414,
            111.1878,
            "新化县",
            &["自然"],
            "湘中最高峰九龙池所在，相传为蚩尤部族世居之地，山巅留有春姬坳古祭台。",
            "⛰️",
        ),
        spot(
            "龙湾温泉度假区",
            27.8167,
            111.2500,
            "新化县",
            &["休闲"],
            "富含偏硅酸的天然温泉，冬日雾凇沿资江支流铺开。",
            "♨️",
        ),
        spot(
            "新化北塔",
            27.7367,
            111.3064,
            "新化县",
            &["人文"],
            "清道光年间的楼阁式砖石塔，旧时资江航运的航标。",
            "🗼",
        ),
        spot(
            "波月洞",
            27.7214,
            111.4692,
            "冷水江市",
            &["自然"],
            "典型喀斯特溶洞，石笋石幔密布，曾为电视剧《西游记》取景地。",
            "🪨",
        ),
        spot(
            "锡矿山世界锑都工业遗址",
            27.7620,
            111.4930,
            "冷水江市",
            &["人文"],
            "一百二十余年的锑矿开采遗存，忆苦窿、烽火台与选矿老厂房保存完整。",
            "🏭",
        ),
        spot(
            "湄江风景区",
            27.9458,
            111.5703,
            "涟源市",
            &["自然"],
            "湘中峡谷型岩溶景区，观音崖、仙人府、塞海湖连成一线。",
            "🏞️",
        ),
        spot(
            "龙山国家森林公园",
            27.5703,
            111.7614,
            "涟源市",
            &["自然"],
            "药王孙思邈隐修传说地，四十八面龙山终年云海缭绕。",
            "🌲",
        ),
        spot(
            "杨市湘军名将故居群",
            27.6520,
            111.8030,
            "涟源市",
            &["人文"],
            "存厚堂、师善堂等湘军将领宅第沿孙水一字排开。",
            "🏯",
        ),
        spot(
            "曾国藩故居富厚堂",
            27.4310,
            112.3190,
            "双峰县",
            &["人文"],
            "晚清名臣曾国藩的乡间侯府，求阙斋藏书楼冠绝湘中。",
            "🏛️",
        ),
        spot(
            "蔡和森纪念馆",
            27.4567,
            112.1972,
            "双峰县",
            &["人文", "红色"],
            "纪念蔡和森、蔡畅兄妹的专题馆，馆前立有和森广场群雕。",
            "🎖️",
        ),
        spot(
            "双峰书院",
            27.4590,
            112.1920,
            "双峰县",
            &["学府"],
            "清乾隆二十五年建，曾国藩少年肄业于此，今为双峰一中校园。",
            "📜",
        ),
        spot(
            "水府庙水库湿地公园",
            27.6940,
            112.3280,
            "双峰县",
            &["自然", "休闲"],
            "湘中最大人工湖，库汊纵横，冬季候鸟成群。",
            "🚤",
        ),
        spot(
            "湖南人文科技学院",
            27.6872,
            111.9934,
            "娄星区",
            &["高校"],
            "省属全日制本科院校，前身为娄底师范高等专科学校。",
            "🎓",
        ),
        spot(
            "娄底职业技术学院",
            27.7103,
            112.0086,
            "娄星区",
            &["高校"],
            "以工科见长的高职院校，月塘校区临涟水河。",
            "🎓",
        ),
        spot(
            "涟滨书院",
            27.7316,
            111.9890,
            "娄星区",
            &["学府"],
            "清嘉庆年间创建的滨水书院，今存讲堂与历代碑刻。",
            "📜",
        ),
        spot(
            "娄底市博物馆",
            27.7281,
            112.0036,
            "娄星区",
            &["人文"],
            "馆藏梅山文化、湘军史料与娄底矿冶文物。",
            "🏛️",
        ),
    ]
}

pub fn eras() -> Vec<Era> {
    vec![
        Era {
            title: "楚·黔中地".to_string(),
            year: "公元前 5 — 前 3 世纪".to_string(),
            desc: "娄底全境属楚国黔中地，梅山峒民世居资水中游，与中原声教不通。"
                .to_string(),
            center: LatLng::new(27.70, 111.80),
            zoom: 8.5,
            groups: vec![group(
                "楚黔中地",
                "#8b5cf6",
                &["新化", "冷水江", "涟源", "双峰", "娄星"],
                27.75,
                111.60,
                9.0,
            )],
        },
        Era {
            title: "秦·郡县初置".to_string(),
            year: "公元前 221 年".to_string(),
            desc: "秦并楚地，湘乡以东入<b>长沙郡</b>，梅山西部仍为化外峒地。".to_string(),
            center: LatLng::new(27.70, 111.90),
            zoom: 8.5,
            groups: vec![
                group("长沙郡", "#3b82f6", &["双峰", "娄星", "涟源"], 27.60, 112.00, 9.5),
                group("梅山峒地", "#8b5cf6", &["新化", "冷水江"], 27.85, 111.30, 9.5),
            ],
        },
        Era {
            title: "西汉·连道".to_string(),
            year: "公元前 202 年".to_string(),
            desc: "汉置<b>连道县</b>于今双峰、娄星一带，隶长沙国；北境为益阳县地。"
                .to_string(),
            center: LatLng::new(27.68, 111.95),
            zoom: 9.0,
            groups: vec![
                group("长沙国连道", "#3b82f6", &["双峰", "娄星"], 27.55, 112.10, 10.0),
                group("益阳县地", "#10b981", &["涟源"], 27.75, 111.66, 10.0),
                group("梅山峒地", "#8b5cf6", &["新化", "冷水江"], 27.85, 111.30, 9.5),
            ],
        },
        Era {
            title: "三国·衡阳郡".to_string(),
            year: "公元 257 年".to_string(),
            desc: "孙吴析长沙西部置<b>衡阳郡</b>，湘乡、连道同郡而治；梅山依旧峒居。"
                .to_string(),
            center: LatLng::new(27.68, 111.95),
            zoom: 9.0,
            groups: vec![
                group("衡阳郡", "#3b82f6", &["双峰", "娄星", "涟源"], 27.60, 112.00, 9.5),
                group("梅山峒地", "#8b5cf6", &["新化", "冷水江"], 27.85, 111.30, 9.5),
            ],
        },
        Era {
            title: "唐·潭邵之间".to_string(),
            year: "公元 7 — 9 世纪".to_string(),
            desc: "东部属潭州湘乡县，西部<b>梅山十峒</b>自立，朝廷羁縻而不郡县。"
                .to_string(),
            center: LatLng::new(27.70, 111.85),
            zoom: 8.5,
            groups: vec![
                group("潭州湘乡县", "#3b82f6", &["双峰", "娄星"], 27.55, 112.10, 10.0),
                group("邵州缘边", "#f97316", &["涟源"], 27.75, 111.66, 10.0),
                group("梅山十峒", "#8b5cf6", &["新化", "冷水江"], 27.85, 111.30, 9.5),
            ],
        },
        Era {
            title: "北宋·熙宁开梅".to_string(),
            year: "公元 1072 年".to_string(),
            desc: "熙宁五年章惇开梅山，上梅置<b>新化县</b>隶邵州，取「王化之新地」意；东部仍隶潭州。"
                .to_string(),
            center: LatLng::new(27.72, 111.70),
            zoom: 9.0,
            groups: vec![
                group("邵州新化县", "#8b5cf6", &["新化", "冷水江"], 27.85, 111.30, 9.5),
                group("潭州湘乡县", "#3b82f6", &["双峰", "娄星"], 27.55, 112.10, 10.0),
                group("安化县缘边", "#10b981", &["涟源"], 27.75, 111.66, 10.0),
            ],
        },
        Era {
            title: "清·两府分治".to_string(),
            year: "公元 1644 — 1911 年".to_string(),
            desc: "新化隶<b>宝庆府</b>，湘乡隶<b>长沙府</b>，娄底街市为湘乡县属商埠。"
                .to_string(),
            center: LatLng::new(27.70, 111.90),
            zoom: 8.5,
            groups: vec![
                group("宝庆府", "#f97316", &["新化", "冷水江"], 27.85, 111.30, 9.5),
                group("长沙府", "#ef4444", &["双峰", "娄星", "涟源"], 27.60, 112.00, 9.5),
            ],
        },
        Era {
            title: "当代·娄底建市".to_string(),
            year: "1999 年至今".to_string(),
            desc: "1977 年设涟源地区，1982 年更名娄底地区，1999 年撤地设市，今辖一区两市两县。"
                .to_string(),
            center: LatLng::new(27.7017, 111.9963),
            zoom: 9.0,
            groups: vec![
                group("新化县", "#8b5cf6", &["新化"], 27.737, 111.327, 10.0),
                group("冷水江市", "#f97316", &["冷水江"], 27.686, 111.436, 11.0),
                group("涟源市", "#10b981", &["涟源"], 27.693, 111.664, 10.0),
                group("双峰县", "#3b82f6", &["双峰"], 27.456, 112.175, 10.0),
                group("娄星区", "#ef4444", &["娄星"], 27.730, 112.002, 11.0),
            ],
        },
    ]
}
