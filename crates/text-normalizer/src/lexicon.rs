//! Token → expansion tables.
//!
//! Every table is stored longest key first so that a short key never
//! shadows a longer key it is a prefix or substring of ("м" inside "м2",
//! "ж.б." inside "ж.б.у.с.").

use kg_core::NormalizerConfig;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// A lookup table ordered longest key first.
pub type Table = Vec<(String, String)>;

/// Month names indexed by month number minus one.
pub const MONTH_NAMES: [&str; 12] = [
    "январь",
    "февраль",
    "март",
    "апрель",
    "май",
    "июнь",
    "июль",
    "август",
    "сентябрь",
    "октябрь",
    "ноябрь",
    "декабрь",
];

const MONTH_ABBREVIATIONS: &[(&str, &str)] = &[
    ("янв", "январь"),
    ("фев", "февраль"),
    ("мар", "март"),
    ("апр", "апрель"),
    ("июн", "июнь"),
    ("июл", "июль"),
    ("авг", "август"),
    ("сен", "сентябрь"),
    ("окт", "октябрь"),
    ("ноя", "ноябрь"),
    ("дек", "декабрь"),
];

const ABBREVIATIONS: &[(&str, &str)] = &[
    ("ж.б.у.с.", "жана башка ушул сыяктуу"),
    ("ж.б.", "жана башка"),
    ("б.з.ч.", "биздин заманга чейин"),
    ("б.з.ч", "биздин заманга чейин"),
    ("б.з.", "биздин заман"),
    ("кк.", "кылымдар"),
    ("жж.", "жылдар"),
    ("к.", "кылым"),
    ("көч.", "көчөсү"),
    ("м-н", "менен"),
    ("б-ча", "боюнча"),
    ("ж-а", "жана"),
    ("т.б.", "тагыраак болсо"),
    ("ө.к.", "өңдүү көп"),
    ("б.а.", "башкача айтканда"),
    ("мис.", "мисалы"),
    // addresses
    ("ш.", "шаары"),
    ("обл.", "облусу"),
    ("р-н", "району"),
    ("р.", "району"),
    ("кв.", "квартира"),
    ("мкр.", "микрорайон"),
    ("мкр", "микрорайон"),
];

const ACRONYMS: &[(&str, &str)] = &[
    ("КР", "кыргыз республикасы"),
    ("КТЖ", "кыргыз темир жолу"),
    ("ЖОЖ", "жогорку окуу жайы"),
    ("КМШ", "көз карандысыз мамлекеттердин шериктештиги"),
    ("ААК", "ачык акционердик коом"),
    ("ЖЧК", "жоопкерчилиги чектелген коом"),
    ("БУУ", "бириккен улуттар уюму"),
    ("АКШ", "америка кошмо штаттары"),
    ("БШК", "борбордук шайлоо комиссиясы"),
    ("ШКУ", "шанхай кызматташтык уюму"),
    ("ЕККУ", "европа коопсуздук жана кызматташуу уюму"),
    ("ЕБ", "европалык биримдик"),
    ("ЕАЭБ", "евразия экономикалык биримдиги"),
    ("СССР", "советтик социалисттик республикалар союзу"),
    ("ФСК", "сорос кыргызстан фонду"),
    ("ЭЭА", "эркин экономикалык аймак"),
    ("ПРООН", "бириккен улуттар уюмунун өнүктүрүү программасы"),
    ("UNICEF", "бириккен улуттар уюмунун балдар фонду"),
    (
        "USAID",
        "америка кошмо штаттарынын эл аралык өнүктүрүү агенттиги",
    ),
    ("ИДП", "ички дүң продукциясы"),
    ("ЖМК", "жалпыга маалымдоо каражаттары"),
    ("ЖАМК", "жаза аткаруу мамлекеттик кызматы"),
    ("УКМК", "улуттук коопсуздук мамлекеттик комитети"),
    ("ТИМ", "тышкы иштер министрлиги"),
    ("ӨКМ", "өзгөчө кырдаалдар министрлиги"),
    ("ИИМ", "ички иштер министрлиги"),
    ("ОИИБ", "облустук ички иштер башкармалыгы"),
    ("ШИИББ", "шаардык ички иштер башкы башкармалыгы"),
    ("РИИБ", "райондук ички иштер башкармалыгы"),
    ("ЧЧК", "чоң чүй каналы"),
];

/// Latin-script acronyms read letter by letter or as a word.
const ENGLISH_ACRONYMS: &[(&str, &str)] = &[
    ("IT", "ай ти"),
    ("AI", "эй ай"),
    ("GPU", "жи пи ю"),
    ("CPU", "си пи ю"),
    ("ML", "эм эл"),
    ("API", "эй пи ай"),
    ("URL", "ю ар эл"),
    ("HTTP", "эйч ти ти пи"),
    ("HTTPS", "эйч ти ти пи эс"),
    ("HTML", "эйч ти эм эл"),
    ("CSS", "си эс эс"),
    ("PDF", "пи ди эф"),
    ("USB", "ю эс би"),
    ("WiFi", "вай фай"),
    ("GPS", "жи пи эс"),
    ("SMS", "эс эм эс"),
    ("SIM", "сим"),
    ("PIN", "пин"),
    ("ATM", "эй ти эм"),
    ("VPN", "ви пи эн"),
    ("iOS", "ай о эс"),
    ("RAM", "рам"),
    ("ROM", "ром"),
    ("SSD", "эс эс ди"),
    ("HDD", "эйч ди ди"),
    ("LED", "лед"),
    ("LCD", "эл си ди"),
    ("TV", "ти ви"),
    ("DVD", "ди ви ди"),
    ("CD", "си ди"),
    ("PR", "пи ар"),
    ("HR", "эйч ар"),
    ("CEO", "си и о"),
    ("ID", "ай ди"),
    ("OK", "окей"),
    ("QR", "кю ар"),
];

const UNITS: &[(&str, &str)] = &[
    ("км", "километр"),
    ("м", "метр"),
    ("см", "сантиметр"),
    ("мм", "миллиметр"),
    ("кг", "килограмм"),
    ("г", "грамм"),
    ("мг", "миллиграмм"),
    ("т", "тонна"),
    ("л", "литр"),
    ("мл", "миллилитр"),
    ("га", "гектар"),
    ("м2", "квадрат метр"),
    ("м3", "куб метр"),
    ("км2", "квадрат километр"),
    ("см2", "квадрат сантиметр"),
    ("км/ч", "километр саатына"),
    ("м/с", "метр секундасына"),
    ("кВт", "киловатт"),
    ("Вт", "ватт"),
    ("МВт", "мегаватт"),
    ("ГГц", "гигагерц"),
    ("МГц", "мегагерц"),
    ("кГц", "килогерц"),
    ("Гц", "герц"),
    ("ГБ", "гигабайт"),
    ("МБ", "мегабайт"),
    ("КБ", "килобайт"),
    ("ТБ", "терабайт"),
    ("мин", "мүнөт"),
    ("мүн", "мүнөт"),
    ("сек", "секунд"),
    ("саат", "саат"),
    ("km", "километр"),
    ("km²", "квадрат километр"),
    ("m", "метр"),
    ("m²", "квадрат метр"),
    ("m³", "куб метр"),
    ("cm", "сантиметр"),
    ("mm", "миллиметр"),
    ("kg", "килограмм"),
    ("g", "грамм"),
    ("mg", "миллиграмм"),
    ("l", "литр"),
    ("ml", "миллилитр"),
    ("ha", "гектар"),
    ("km/h", "километр саатына"),
    ("m/s", "метр секундасына"),
    ("kW", "киловатт"),
    ("W", "ватт"),
    ("MW", "мегаватт"),
    ("GHz", "гигагерц"),
    ("MHz", "мегагерц"),
    ("kHz", "килогерц"),
    ("Hz", "герц"),
    ("GB", "гигабайт"),
    ("MB", "мегабайт"),
    ("KB", "килобайт"),
    ("TB", "терабайт"),
    ("min", "мүнөт"),
    ("sec", "секунд"),
    ("h", "саат"),
];

const CURRENCIES: &[(&str, &str)] = &[
    ("$", "доллар"),
    ("€", "евро"),
    ("₽", "рубль"),
    ("¥", "юань"),
    ("£", "фунт"),
    ("₸", "тенге"),
    ("₴", "гривна"),
];

const LARGE_NUMBERS: &[(&str, &str)] = &[
    ("млн", "миллион"),
    ("млрд", "миллиард"),
    ("трлн", "триллион"),
    ("тыс", "миң"),
];

const SYMBOLS: &[(&str, &str)] = &[
    ("%", "пайыз"),
    ("№", "номур"),
    ("@", "эт белгиси"),
    ("&", "жана"),
    ("§", "параграф"),
    ("©", "автордук укук"),
    ("®", "катталган"),
    ("™", "соода белгиси"),
    ("°", "градус"),
    ("≈", "болжол менен"),
    ("≠", "барабар эмес"),
    ("≤", "кичине же барабар"),
    ("≥", "чоң же барабар"),
    ("±", "кошуу кемитүү"),
];

/// The national currency, spelled out by dedicated amount rules.
pub const NATIONAL_CURRENCY: &str = "сом";

/// Read-only lexicon built once per normalizer.
#[derive(Debug, Clone)]
pub struct Lexicon {
    abbreviations: Table,
    month_abbreviations: Table,
    acronyms: Table,
    english_acronyms: Table,
    units: Table,
    currencies: Table,
    large_numbers: Table,
    symbols: Table,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Build the lexicon from the built-in tables.
    pub fn new() -> Self {
        Self::with_config(&NormalizerConfig::default())
    }

    /// Build the lexicon, merging configured overrides over the built-ins.
    pub fn with_config(config: &NormalizerConfig) -> Self {
        Self {
            abbreviations: merge(ABBREVIATIONS, &config.abbreviations),
            month_abbreviations: merge(MONTH_ABBREVIATIONS, &BTreeMap::new()),
            acronyms: merge(ACRONYMS, &config.acronyms),
            english_acronyms: merge(ENGLISH_ACRONYMS, &BTreeMap::new()),
            units: merge(UNITS, &config.units),
            currencies: merge(CURRENCIES, &config.currencies),
            large_numbers: merge(LARGE_NUMBERS, &BTreeMap::new()),
            symbols: merge(SYMBOLS, &config.symbols),
        }
    }

    pub fn abbreviations(&self) -> &[(String, String)] {
        &self.abbreviations
    }

    pub fn month_abbreviations(&self) -> &[(String, String)] {
        &self.month_abbreviations
    }

    pub fn acronyms(&self) -> &[(String, String)] {
        &self.acronyms
    }

    pub fn english_acronyms(&self) -> &[(String, String)] {
        &self.english_acronyms
    }

    pub fn units(&self) -> &[(String, String)] {
        &self.units
    }

    pub fn currencies(&self) -> &[(String, String)] {
        &self.currencies
    }

    pub fn large_numbers(&self) -> &[(String, String)] {
        &self.large_numbers
    }

    pub fn symbols(&self) -> &[(String, String)] {
        &self.symbols
    }

    /// Spoken name of a unit token.
    pub fn unit(&self, token: &str) -> Option<&str> {
        lookup(&self.units, token)
    }

    /// Spoken name of a standalone symbol.
    pub fn symbol(&self, token: &str) -> Option<&str> {
        lookup(&self.symbols, token)
    }

    /// Distinct currency words, the national currency included, longest first.
    pub fn currency_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .currencies
            .iter()
            .map(|(_, name)| name.as_str())
            .chain([NATIONAL_CURRENCY])
            .collect();
        words.sort_by_key(|w| (Reverse(w.chars().count()), *w));
        words.dedup();
        words
    }
}

/// Month name for a month number in `1..=12`.
pub fn month_name(number: u32) -> Option<&'static str> {
    let index = usize::try_from(number).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// Expansion of `token` in a token table.
pub(crate) fn lookup<'a>(table: &'a [(String, String)], token: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|(key, _)| key == token)
        .map(|(_, value)| value.as_str())
}

fn merge(defaults: &[(&str, &str)], overrides: &BTreeMap<String, String>) -> Table {
    let mut merged: BTreeMap<String, String> = defaults
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));

    let mut table: Table = merged.into_iter().collect();
    table.sort_by_key(|(key, _)| Reverse(key.chars().count()));
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_longest_first(table: &[(String, String)]) -> bool {
        table
            .windows(2)
            .all(|w| w[0].0.chars().count() >= w[1].0.chars().count())
    }

    #[test]
    fn test_tables_longest_first() {
        let lexicon = Lexicon::new();
        assert!(is_longest_first(lexicon.abbreviations()));
        assert!(is_longest_first(lexicon.acronyms()));
        assert!(is_longest_first(lexicon.english_acronyms()));
        assert!(is_longest_first(lexicon.units()));
        assert!(is_longest_first(lexicon.currencies()));
        assert!(is_longest_first(lexicon.symbols()));
    }

    #[test]
    fn test_longer_key_precedes_its_prefix() {
        let lexicon = Lexicon::new();
        let position = |key: &str| {
            lexicon
                .units()
                .iter()
                .position(|(k, _)| k == key)
                .unwrap()
        };
        assert!(position("м2") < position("м"));
        assert!(position("км/ч") < position("км"));

        let abbr = lexicon.abbreviations();
        let long = abbr.iter().position(|(k, _)| k == "ж.б.у.с.").unwrap();
        let short = abbr.iter().position(|(k, _)| k == "ж.б.").unwrap();
        assert!(long < short);
    }

    #[test]
    fn test_lookups() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.unit("км"), Some("километр"));
        assert_eq!(lexicon.unit("мүн"), Some("мүнөт"));
        assert_eq!(lookup(lexicon.large_numbers(), "млрд"), Some("миллиард"));
        assert_eq!(lexicon.symbol("%"), Some("пайыз"));
        assert_eq!(lexicon.unit("парсек"), None);
    }

    #[test]
    fn test_config_overrides_and_additions() {
        let mut config = NormalizerConfig::default();
        config.units.insert("км".to_string(), "чакырым".to_string());
        config.units.insert("ft".to_string(), "фут".to_string());
        config.currencies.insert("₩".to_string(), "вон".to_string());

        let lexicon = Lexicon::with_config(&config);
        assert_eq!(lexicon.unit("км"), Some("чакырым"));
        assert_eq!(lexicon.unit("ft"), Some("фут"));
        assert_eq!(lexicon.units().len(), UNITS.len() + 1);
        assert!(lexicon.currency_words().contains(&"вон"));
    }

    #[test]
    fn test_currency_words() {
        let lexicon = Lexicon::new();
        let words = lexicon.currency_words();
        assert!(words.contains(&"сом"));
        assert!(words.contains(&"доллар"));
        assert_eq!(words.len(), CURRENCIES.len() + 1);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), Some("январь"));
        assert_eq!(month_name(12), Some("декабрь"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }
}
