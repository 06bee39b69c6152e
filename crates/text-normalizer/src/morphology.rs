//! Suffix harmony for Kyrgyz.
//!
//! A suffix template is adapted to the stem it attaches to:
//!
//! - its initial д/т or г/к becomes н after a vowel, the voiceless variant
//!   after a voiceless consonant, and the voiced variant otherwise;
//! - its vowels follow the class of the stem's last vowel (back/front,
//!   rounded/unrounded). о/у never mix with ө/ү.

/// Back rounded vowels.
const BACK_ROUNDED: &[char] = &['о', 'у'];
/// Back unrounded vowels.
const BACK_UNROUNDED: &[char] = &['а', 'ы'];
/// Front rounded vowels.
const FRONT_ROUNDED: &[char] = &['ө', 'ү'];
/// Front unrounded vowels.
const FRONT_UNROUNDED: &[char] = &['е', 'и'];

const VOICELESS: &[char] = &['к', 'п', 'с', 'т', 'ф', 'х', 'ц', 'ч', 'ш', 'щ'];

/// Idiomatic minute forms used in clock times: (numeral, suffix base, form).
const TIME_EXCEPTIONS: &[(&str, &str, &str)] = &[
    ("нөл", "га", "нөлгө"),
    ("беш", "га", "бешке"),
    ("он", "га", "онго"),
    ("он беш", "га", "он бешке"),
    ("жыйырма", "га", "жыйырмага"),
    ("жыйырма беш", "га", "жыйырма бешке"),
    ("отуз", "га", "отузга"),
    ("отуз беш", "га", "отуз бешке"),
    ("кырк", "га", "кыркка"),
    ("кырк беш", "га", "кырк бешке"),
    ("элүү", "га", "элүүгө"),
    ("элүү беш", "га", "элүү бешке"),
    ("нөл", "да", "нөлдө"),
    ("беш", "да", "беште"),
    ("он", "да", "ондо"),
    ("он беш", "да", "он беште"),
    ("жыйырма", "да", "жыйырмада"),
    ("жыйырма беш", "да", "жыйырма беште"),
    ("отуз", "да", "отузда"),
    ("отуз беш", "да", "отуз беште"),
    ("кырк", "да", "кыркта"),
    ("кырк беш", "да", "кырк беште"),
    ("элүү", "да", "элүүдө"),
    ("элүү беш", "да", "элүү беште"),
];

/// Vowel class of a stem's last vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VowelClass {
    BackRounded,
    BackUnrounded,
    FrontRounded,
    FrontUnrounded,
    /// Stem has no vowel.
    None,
}

impl VowelClass {
    fn of(c: char) -> Self {
        if BACK_ROUNDED.contains(&c) {
            Self::BackRounded
        } else if BACK_UNROUNDED.contains(&c) {
            Self::BackUnrounded
        } else if FRONT_ROUNDED.contains(&c) {
            Self::FrontRounded
        } else if FRONT_UNROUNDED.contains(&c) {
            Self::FrontUnrounded
        } else {
            Self::None
        }
    }
}

fn is_vowel(c: char) -> bool {
    VowelClass::of(c) != VowelClass::None
}

/// Suffix harmony engine with a lookup table of irregular clock forms.
#[derive(Debug, Clone)]
pub struct MorphologyEngine {
    exceptions: &'static [(&'static str, &'static str, &'static str)],
}

impl Default for MorphologyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MorphologyEngine {
    /// Create an engine with the built-in exception table.
    pub fn new() -> Self {
        Self {
            exceptions: TIME_EXCEPTIONS,
        }
    }

    /// Attach `suffix` to `stem`, checking the exception table first.
    pub fn harmonize(&self, stem: &str, suffix: &str) -> String {
        self.exception(stem, suffix)
            .map(str::to_string)
            .unwrap_or_else(|| Self::apply_harmony(stem, suffix))
    }

    /// Look up an irregular form for a (numeral, suffix base) pair.
    pub fn exception(&self, stem: &str, suffix: &str) -> Option<&'static str> {
        self.exceptions
            .iter()
            .find(|(word, base, _)| *word == stem && *base == suffix)
            .map(|(_, _, form)| *form)
    }

    /// Attach `suffix` to `stem` using the general harmony rules only.
    pub fn apply_harmony(stem: &str, suffix: &str) -> String {
        if suffix.is_empty() {
            return stem.to_string();
        }

        let lower = stem.trim().to_lowercase();
        let Some(last_char) = lower.chars().last() else {
            return format!("{stem}{suffix}");
        };

        let class = lower
            .chars()
            .rev()
            .find(|c| is_vowel(*c))
            .map(VowelClass::of)
            .unwrap_or(VowelClass::None);
        let ends_with_vowel = is_vowel(last_char);
        let ends_with_voiceless = VOICELESS.contains(&last_char);

        let mut chars = suffix.chars();
        let mut result = String::with_capacity(suffix.len() + 2);

        if let Some(first) = chars.next() {
            let first = match first {
                'д' | 'т' if ends_with_vowel => 'н',
                'д' | 'т' if ends_with_voiceless => 'т',
                'д' | 'т' => 'д',
                'г' | 'к' if ends_with_vowel => 'н',
                'г' | 'к' if ends_with_voiceless => 'к',
                'г' | 'к' => 'г',
                other => other,
            };
            result.push(harmonize_vowel(first, class, ends_with_vowel));
        }

        for c in chars {
            result.push(harmonize_vowel(c, class, ends_with_vowel));
        }

        format!("{stem}{result}")
    }

    /// Collapse the orthographic variants of a case suffix to its base:
    /// го/ге/гө → га, and the same for the к-, д- and т- families.
    pub fn case_base(suffix: &str) -> &str {
        match suffix {
            "га" | "ге" | "го" | "гө" => "га",
            "ка" | "ке" | "ко" | "кө" => "ка",
            "да" | "де" | "до" | "дө" => "да",
            "та" | "те" | "то" | "тө" => "та",
            other => other,
        }
    }
}

fn harmonize_vowel(c: char, class: VowelClass, ends_with_vowel: bool) -> char {
    use VowelClass::*;

    match c {
        'а' => match class {
            FrontRounded => 'ө',
            FrontUnrounded => 'е',
            BackRounded if !ends_with_vowel => 'о',
            _ => 'а',
        },
        'ы' => match class {
            FrontRounded => 'ү',
            FrontUnrounded => 'и',
            BackRounded => 'у',
            _ => 'ы',
        },
        'о' if class == FrontRounded => 'ө',
        'у' if class == FrontRounded => 'ү',
        'ө' if class == BackRounded => 'о',
        'ү' if class == BackRounded => 'у',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harmony(stem: &str, suffix: &str) -> String {
        MorphologyEngine::apply_harmony(stem, suffix)
    }

    #[test]
    fn test_voiced_final_keeps_d_unlike_voiceless_branch() {
        // з is voiced, so сегиз takes the д branch, not т
        assert_eq!(harmony("сегиз", "да"), "сегизде");
        assert_ne!(harmony("сегиз", "да"), "сегизте");
        assert_eq!(harmony("сегиз", "га"), "сегизге");
    }

    #[test]
    fn test_consonant_assimilation() {
        // voiceless final consonant
        assert_eq!(harmony("беш", "да"), "беште");
        assert_eq!(harmony("беш", "га"), "бешке");
        assert_eq!(harmony("кырк", "да"), "кыркта");
        // final vowel
        assert_eq!(harmony("жыйырма", "да"), "жыйырмана");
        assert_eq!(harmony("элүү", "га"), "элүүнө");
    }

    #[test]
    fn test_vowel_harmony() {
        assert_eq!(harmony("он", "га"), "онго");
        assert_eq!(harmony("нөл", "да"), "нөлдө");
        assert_eq!(harmony("отуз", "га"), "отузго");
        assert_eq!(
            harmony("кыргыз республикасы", "нын"),
            "кыргыз республикасынын"
        );
        assert_eq!(harmony("үй", "ду"), "үйдү");
    }

    #[test]
    fn test_rounded_classes_do_not_mix() {
        // front rounded stem turns о/у into ө/ү
        assert_eq!(harmony("көл", "до"), "көлдө");
        // back rounded stem turns ө/ү into о/у
        assert_eq!(harmony("тоо", "гө"), "тооно");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(harmony("беш", ""), "беш");
        assert_eq!(harmony("", "да"), "да");
    }

    #[test]
    fn test_exceptions_checked_first() {
        let engine = MorphologyEngine::new();
        assert_eq!(engine.harmonize("жыйырма", "га"), "жыйырмага");
        assert_eq!(engine.harmonize("отуз", "га"), "отузга");
        assert_eq!(engine.harmonize("элүү", "да"), "элүүдө");
        // falls back to the general rule
        assert_eq!(engine.harmonize("кырк эки", "га"), "кырк экине");
    }

    #[test]
    fn test_case_base() {
        assert_eq!(MorphologyEngine::case_base("гө"), "га");
        assert_eq!(MorphologyEngine::case_base("ке"), "ка");
        assert_eq!(MorphologyEngine::case_base("до"), "да");
        assert_eq!(MorphologyEngine::case_base("тө"), "та");
        assert_eq!(MorphologyEngine::case_base("нын"), "нын");
    }
}
