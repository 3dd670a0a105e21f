/// Turn a language code (`en-us`) into a locale name (`en_US`).
///
/// A region longer than two characters is title-cased (`sr-latn` → `sr_Latn`),
/// a two-letter region is upper-cased. Anything after a second `-` is kept as
/// is. Codes without a region only have their first three characters
/// lower-cased, so locale names pass through unchanged.
pub fn to_locale(language: &str) -> String {
    let lowered = language.to_lowercase();
    let Some((lang, country)) = lowered.split_once('-') else {
        let head: String = language.chars().take(3).collect::<String>().to_lowercase();
        let tail: String = language.chars().skip(3).collect();
        return head + &tail;
    };

    let (country, tail) = match country.split_once('-') {
        Some((country, tail)) => (country, Some(tail)),
        None => (country, None),
    };

    let mut region = if country.chars().count() > 2 {
        title_case(country)
    } else {
        country.to_uppercase()
    };
    if let Some(tail) = tail {
        region.push('-');
        region.push_str(tail);
    }

    format!("{lang}_{region}")
}

fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
