//! Built-in IPADIC templates for the word classes the generator knows.
//!
//! Context ids and category names follow the IPADIC `left-id.def` /
//! `right-id.def` entries for each form.

use dicgen_protocol::FeatureVector;

const fn t(id: u16, pos: [&'static str; 4], conj_type: &'static str, conj_form: &'static str) -> FeatureVector {
    FeatureVector::template(id, id, pos, conj_type, conj_form)
}

/// Coarse label routing to the verb path.
pub const VERB_LABEL: &str = "動詞";
/// Coarse label routing to the 〜しい adjective path.
pub const SHII_LABEL: &str = "〜しい";

const VERB: [&str; 4] = ["動詞", "自立", "*", "*"];
const ADJ: [&str; 4] = ["形容詞", "自立", "*", "*"];

/// 五段・ワ行促音便, one template per form. Paired positionally with
/// [`WA_ONBIN_U_SUFFIXES`] or [`WA_ONBIN_RU_SUFFIXES`].
pub static GODAN_WA_ONBIN: [FeatureVector; 7] = [
    t(814, VERB, "五段・ワ行促音便", "仮定形"),
    t(817, VERB, "五段・ワ行促音便", "基本形"),
    t(820, VERB, "五段・ワ行促音便", "未然ウ接続"),
    t(823, VERB, "五段・ワ行促音便", "未然形"),
    t(826, VERB, "五段・ワ行促音便", "命令e"),
    t(829, VERB, "五段・ワ行促音便", "連用タ接続"),
    t(832, VERB, "五段・ワ行促音便", "連用形"),
];

/// Endings for lemmas ending in う.
pub const WA_ONBIN_U_SUFFIXES: &str = "えうおわえっい";
/// Endings for lemmas ending in る.
pub const WA_ONBIN_RU_SUFFIXES: &str = "れるろられっり";

/// 五段・マ行, used for compound verbs in 〜込む.
pub static GODAN_MA: [(&str, FeatureVector); 8] = [
    ("め", t(760, VERB, "五段・マ行", "仮定形")),
    ("みゃ", t(761, VERB, "五段・マ行", "仮定縮約1")),
    ("む", t(762, VERB, "五段・マ行", "基本形")),
    ("も", t(763, VERB, "五段・マ行", "未然ウ接続")),
    ("ま", t(764, VERB, "五段・マ行", "未然形")),
    ("め", t(765, VERB, "五段・マ行", "命令e")),
    ("ん", t(766, VERB, "五段・マ行", "連用タ接続")),
    ("み", t(767, VERB, "五段・マ行", "連用形")),
];

/// 形容詞・イ段, attached to a stem ending in し.
pub static SHII: [(&str, FeatureVector); 16] = [
    ("い", t(43, ADJ, "形容詞・イ段", "基本形")),
    ("", t(45, ADJ, "形容詞・イ段", "文語基本形")),
    ("から", t(47, ADJ, "形容詞・イ段", "未然ヌ接続")),
    ("かろ", t(46, ADJ, "形容詞・イ段", "未然ウ接続")),
    ("かっ", t(50, ADJ, "形容詞・イ段", "連用タ接続")),
    ("く", t(51, ADJ, "形容詞・イ段", "連用テ接続")),
    ("くっ", t(51, ADJ, "形容詞・イ段", "連用テ接続")),
    ("ゅう", t(49, ADJ, "形容詞・イ段", "連用ゴザイ接続")),
    ("ゅぅ", t(49, ADJ, "形容詞・イ段", "連用ゴザイ接続")),
    ("う", t(49, ADJ, "形容詞・イ段", "連用ゴザイ接続")),
    ("き", t(44, ADJ, "形容詞・イ段", "体言接続")),
    ("けれ", t(40, ADJ, "形容詞・イ段", "仮定形")),
    ("かれ", t(48, ADJ, "形容詞・イ段", "命令e")),
    ("けりゃ", t(41, ADJ, "形容詞・イ段", "仮定縮約1")),
    ("きゃ", t(42, ADJ, "形容詞・イ段", "仮定縮約2")),
    ("", t(39, ADJ, "形容詞・イ段", "ガル接続")),
];

/// Labels written as a single, uninflected row.
pub static FIXED_CATEGORIES: [(&str, FeatureVector); 25] = [
    ("名詞,一般名詞", t(1285, ["名詞", "一般", "*", "*"], "*", "*")),
    ("名詞,サ変", t(1283, ["名詞", "サ変接続", "*", "*"], "*", "*")),
    ("名詞,固有名詞", t(1288, ["名詞", "固有名詞", "一般", "*"], "*", "*")),
    ("名詞,姓", t(1290, ["名詞", "固有名詞", "人名", "姓"], "*", "*")),
    ("名詞,名", t(1291, ["名詞", "固有名詞", "人名", "名"], "*", "*")),
    ("名詞,人名一般", t(1289, ["名詞", "固有名詞", "人名", "一般"], "*", "*")),
    ("名詞,組織", t(1292, ["名詞", "固有名詞", "組織", "*"], "*", "*")),
    ("名詞,地域", t(1293, ["名詞", "固有名詞", "地域", "一般"], "*", "*")),
    ("名詞,形容動詞語幹", t(1287, ["名詞", "形容動詞語幹", "*", "*"], "*", "*")),
    ("名詞,接尾-一般", t(1298, ["名詞", "接尾", "一般", "*"], "*", "*")),
    ("名詞,接尾-人名", t(1302, ["名詞", "接尾", "人名", "*"], "*", "*")),
    ("名詞,接尾-助数詞", t(1300, ["名詞", "接尾", "助数詞", "*"], "*", "*")),
    ("名詞,接尾-形容動詞語幹", t(1301, ["名詞", "接尾", "形容動詞語幹", "*"], "*", "*")),
    ("名詞,代名詞", t(1306, ["名詞", "代名詞", "一般", "*"], "*", "*")),
    ("名詞,数", t(1295, ["名詞", "数", "*", "*"], "*", "*")),
    ("記号,一般", t(5, ["記号", "一般", "*", "*"], "*", "*")),
    ("感動詞", t(3, ["感動詞", "*", "*", "*"], "*", "*")),
    ("副詞,一般", t(1281, ["副詞", "一般", "*", "*"], "*", "*")),
    ("副詞,助詞類接続", t(1282, ["副詞", "助詞類接続", "*", "*"], "*", "*")),
    ("形容詞,アウオ基本形", t(19, ADJ, "形容詞・アウオ段", "基本形")),
    ("接頭詞,名詞接続", t(560, ["接頭詞", "名詞接続", "*", "*"], "*", "*")),
    ("接頭詞,形容詞接続", t(557, ["接頭詞", "形容詞接続", "*", "*"], "*", "*")),
    ("連体詞", t(1315, ["連体詞", "*", "*", "*"], "*", "*")),
    ("動詞,五段ラ行基本", t(772, VERB, "五段・ラ行", "基本形")),
    ("フィラー", t(2, ["フィラー", "*", "*", "*"], "*", "*")),
];
