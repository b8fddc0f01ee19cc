// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Connector words per language: prepositions, articles, conjunctions and a
//! handful of pronouns that carry no product information on their own.
//!
//! Entries are lowercase and keep their diacritics, because connector
//! trimming runs before diacritic stripping.

use super::Language;

pub(super) fn words(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Pl => PL,
        Language::De => DE,
        Language::En => EN,
        Language::Ru => RU,
        Language::Hu => HU,
        Language::Ro => RO,
        Language::Fr => FR,
        Language::It => IT,
        Language::Uk => UK,
        Language::Sl => SL,
        Language::Es => ES,
    }
}

const PL: &[&str] = &[
    "a", "aby", "albo", "ale", "ani", "bez", "beze", "blisko", "by", "bo", "co", "czy", "dla",
    "do", "dookoła", "dzięki", "gdy", "i", "iż", "jak", "jako", "jednak", "jeśli", "ku", "lecz",
    "lub", "mimo", "między", "na", "nad", "nade", "naprzeciw", "naprzeciwko", "niż", "o", "obok",
    "od", "ode", "oraz", "po", "pod", "pode", "podczas", "poza", "przed", "przede", "przez",
    "przeze", "przy", "oprócz", "spod", "spode", "spośród", "sprzed", "u", "w", "we", "wobec",
    "wokół", "wśród", "z", "za", "zamiast", "ze", "że", "żeby", "zza", "znad", "zgodnie", "według",
    "około", "koło", "wzdłuż", "względem", "ponad", "poprzez", "pomiędzy", "celem", "także",
    "też", "to", "ten", "ta", "te", "tego", "tej", "tych", "który", "która", "które", "których",
    "jego", "jej", "ich", "się", "sobie", "tylko", "już", "jeszcze", "bardzo",
];

const DE: &[&str] = &[
    "der", "die", "das", "den", "dem", "des", "ein", "eine", "einer", "einen", "einem", "eines",
    "und", "oder", "aber", "sondern", "denn", "doch", "sowie", "als", "wie", "wenn", "dass",
    "ob", "weil", "für", "fuer", "mit", "ohne", "gegen", "um", "durch", "bis", "ab", "aus",
    "bei", "nach", "seit", "von", "vom", "zu", "zum", "zur", "an", "am", "auf", "hinter", "in",
    "im", "ins", "neben", "über", "unter", "vor", "zwischen", "trotz", "während", "wegen",
    "statt", "anstatt", "außer", "ausser", "gegenüber", "entlang", "innerhalb", "außerhalb",
    "oberhalb", "unterhalb", "laut", "samt", "beim", "vorm", "übers", "unters", "aufs", "ans",
    "fürs", "durchs", "ums", "so", "auch", "nur", "noch", "sehr", "dieser", "diese", "dieses",
    "jener", "jene", "jenes", "welcher", "welche", "welches", "sich", "es",
];

const EN: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "nor", "so", "yet", "for", "of", "in", "on", "at",
    "to", "from", "by", "with", "without", "within", "into", "onto", "upon", "about", "above",
    "across", "after", "against", "along", "amid", "among", "around", "as", "before", "behind",
    "below", "beneath", "beside", "besides", "between", "beyond", "despite", "down", "during",
    "except", "inside", "like", "near", "off", "out", "outside", "over", "past", "per", "since",
    "than", "through", "throughout", "till", "toward", "towards", "under", "underneath",
    "unlike", "until", "up", "versus", "via", "vs", "that", "this", "these", "those", "which",
    "who", "whom", "whose", "it", "its", "is", "are", "be", "very", "just", "also", "too",
    "then", "there", "here", "my", "your", "our", "their", "some", "any",
];

const RU: &[&str] = &[
    "а", "без", "безо", "близ", "в", "во", "вдоль", "вместо", "вне", "внутри", "возле", "вокруг",
    "для", "до", "за", "и", "из", "изо", "из-за", "из-под", "или", "к", "ко", "кроме", "между",
    "меж", "на", "над", "надо", "но", "о", "об", "обо", "около", "от", "ото", "перед", "передо",
    "по", "под", "подо", "после", "при", "про", "ради", "с", "со", "сквозь", "среди", "у",
    "через", "чтобы", "что", "как", "также", "тоже", "либо", "ни", "да", "же", "ли", "бы",
    "это", "этот", "эта", "эти", "тот", "та", "те", "который", "которая", "которые", "его",
    "её", "ее", "их", "свой", "своя", "своё", "очень", "уже", "ещё", "еще", "только",
];

const HU: &[&str] = &[
    "a", "az", "egy", "és", "vagy", "de", "hogy", "mert", "ha", "is", "sem", "meg", "pedig",
    "hanem", "illetve", "valamint", "mint", "alatt", "által", "át", "elé", "előtt", "felé",
    "felett", "fölött", "helyett", "kívül", "között", "közé", "mellett", "mellé", "miatt",
    "mögött", "nélkül", "óta", "szerint", "számára", "után", "végett", "iránt", "körül",
    "keresztül", "belül", "ellen", "közben", "alá", "fölé", "ez", "azt", "ezt", "ami", "amely",
    "aki", "nagyon", "csak", "még", "már", "itt", "ott", "ebben", "abban", "ehhez", "ahhoz",
];

const RO: &[&str] = &[
    "a", "al", "ai", "ale", "și", "şi", "si", "sau", "dar", "iar", "ci", "că", "ca", "pentru",
    "de", "din", "la", "cu", "fără", "în", "într", "printre", "prin", "pe", "pentru", "despre",
    "spre", "sub", "peste", "până", "lângă", "după", "înainte", "înaintea", "între", "dintre",
    "contra", "împotriva", "datorită", "conform", "potrivit", "asupra", "deasupra", "dedesubt",
    "un", "o", "unei", "unui", "niște", "cel", "cea", "cei", "cele", "lui", "ei", "lor", "acest",
    "această", "aceste", "acești", "care", "ce", "foarte", "doar", "mai", "deja", "încă",
];

const FR: &[&str] = &[
    "le", "la", "les", "l", "un", "une", "des", "du", "de", "d", "au", "aux", "et", "ou", "mais",
    "donc", "or", "ni", "car", "que", "qu", "qui", "quoi", "dont", "où", "à", "a", "en", "dans",
    "par", "pour", "sur", "sous", "avec", "sans", "chez", "entre", "contre", "vers", "depuis",
    "pendant", "avant", "après", "devant", "derrière", "selon", "parmi", "malgré", "envers",
    "hors", "dès", "jusque", "jusqu", "outre", "près", "auprès", "autour", "au-dessus",
    "au-dessous", "ce", "cet", "cette", "ces", "son", "sa", "ses", "leur", "leurs", "se", "très",
    "plus", "aussi", "comme", "si", "y",
];

const IT: &[&str] = &[
    "il", "lo", "la", "i", "gli", "le", "l", "un", "uno", "una", "un'", "e", "ed", "o", "od",
    "ma", "però", "che", "se", "come", "di", "a", "da", "in", "con", "su", "per", "tra", "fra",
    "del", "dello", "della", "dei", "degli", "delle", "al", "allo", "alla", "ai", "agli",
    "alle", "dal", "dallo", "dalla", "dai", "dagli", "dalle", "nel", "nello", "nella", "nei",
    "negli", "nelle", "col", "coi", "sul", "sullo", "sulla", "sui", "sugli", "sulle", "senza",
    "sopra", "sotto", "dentro", "fuori", "verso", "presso", "contro", "dopo", "prima", "durante",
    "mediante", "secondo", "oltre", "questo", "questa", "questi", "queste", "quello", "quella",
    "molto", "anche", "solo", "più", "già",
];

const UK: &[&str] = &[
    "а", "але", "без", "біля", "в", "у", "вздовж", "від", "до", "для", "з", "із", "зі", "за",
    "замість", "і", "й", "та", "або", "чи", "к", "крім", "між", "на", "над", "наді", "о", "об",
    "обі", "перед", "переді", "по", "під", "піді", "після", "при", "про", "ради", "серед",
    "через", "що", "щоб", "як", "також", "теж", "ні", "же", "б", "би", "це", "цей", "ця", "ці",
    "той", "та", "ті", "який", "яка", "яке", "які", "його", "її", "їх", "свій", "своя", "своє",
    "дуже", "вже", "ще", "тільки", "лише", "поза", "поруч", "навколо", "всередині", "попри",
];

const SL: &[&str] = &[
    "in", "ali", "pa", "a", "ampak", "toda", "da", "ker", "če", "ko", "kot", "ter", "niti",
    "za", "z", "s", "iz", "iz", "od", "do", "na", "v", "o", "po", "pri", "pod", "nad", "pred",
    "med", "čez", "skozi", "proti", "brez", "zaradi", "namesto", "poleg", "okoli", "okrog",
    "zunaj", "znotraj", "vzdolž", "razen", "kljub", "glede", "k", "h", "ob", "ta", "to", "te",
    "ti", "tisti", "tista", "tisto", "ki", "kateri", "katera", "katero", "njegov", "njen",
    "njihov", "svoj", "zelo", "samo", "tudi", "že", "še", "se", "si",
];

const ES: &[&str] = &[
    "el", "la", "los", "las", "lo", "un", "una", "unos", "unas", "y", "e", "o", "u", "ni",
    "pero", "sino", "que", "porque", "pues", "si", "como", "a", "al", "ante", "bajo", "cabe",
    "con", "contra", "de", "del", "desde", "durante", "en", "entre", "hacia", "hasta",
    "mediante", "para", "por", "según", "sin", "so", "sobre", "tras", "versus", "vía", "cerca",
    "dentro", "fuera", "encima", "debajo", "delante", "detrás", "junto", "este", "esta", "estos",
    "estas", "ese", "esa", "esos", "esas", "aquel", "aquella", "su", "sus", "se", "muy", "más",
    "también", "solo", "ya",
];
