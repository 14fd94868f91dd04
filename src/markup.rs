use crate::errors::FetchError;
use crate::models::{ApiJoke, JokeKind};
use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedJoke {
    pub text: String,
    pub plain: String,
}

pub fn strip_markup(input: &str) -> String {
    TAG.replace_all(&input.replace("<br>", "\n"), "").into_owned()
}

// Tags vanish entirely, `<br>` included; literal newlines stay.
pub fn text_content(input: &str) -> String {
    TAG.replace_all(input, "").into_owned()
}

// `text` goes to history; `plain` is what the joke area reads back after a fetch.
pub fn compose(joke: &ApiJoke) -> Result<ComposedJoke, FetchError> {
    match joke.kind {
        JokeKind::TwoPart => {
            let (Some(setup), Some(delivery)) = (joke.setup.as_deref(), joke.delivery.as_deref())
            else {
                return Err(FetchError::Incomplete("setup/delivery"));
            };
            Ok(ComposedJoke {
                text: format!("{} \n\n {}", strip_markup(setup), strip_markup(delivery)),
                plain: format!("{}  {}", text_content(setup), text_content(delivery)),
            })
        }
        JokeKind::Single => {
            let joke = joke.joke.as_deref().ok_or(FetchError::Incomplete("joke"))?;
            Ok(ComposedJoke {
                text: strip_markup(joke),
                plain: text_content(joke),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JokeFlags;

    fn api(kind: JokeKind) -> ApiJoke {
        ApiJoke {
            kind,
            setup: None,
            delivery: None,
            joke: None,
            category: None,
            flags: JokeFlags::default(),
        }
    }

    #[test]
    fn strips_tags_and_keeps_breaks() {
        assert_eq!(strip_markup("a<br><b>b</b>"), "a\nb");
        assert_eq!(strip_markup("plain"), "plain");
        assert_eq!(strip_markup("<i></i>"), "");
        assert_eq!(text_content("a<br><b>b</b>\nc"), "ab\nc");
    }

    #[test]
    fn two_part_text_separates_setup_and_delivery() {
        let mut joke = api(JokeKind::TwoPart);
        joke.setup = Some("Why did the chicken cross?".to_string());
        joke.delivery = Some("<em>To get across.</em>".to_string());
        let composed = compose(&joke).unwrap();
        assert_eq!(
            composed.text,
            "Why did the chicken cross? \n\n To get across."
        );
        assert_eq!(composed.plain, "Why did the chicken cross?  To get across.");
    }

    #[test]
    fn single_joke_keeps_its_own_newlines() {
        let mut joke = api(JokeKind::Single);
        joke.joke = Some("I have a UDP joke\nbut you might not get it".to_string());
        let composed = compose(&joke).unwrap();
        assert_eq!(composed.text, "I have a UDP joke\nbut you might not get it");
        assert_eq!(composed.plain, "I have a UDP joke\nbut you might not get it");
    }

    #[test]
    fn missing_parts_are_incomplete() {
        assert!(matches!(
            compose(&api(JokeKind::Single)),
            Err(FetchError::Incomplete("joke"))
        ));

        let mut joke = api(JokeKind::TwoPart);
        joke.setup = Some("S".to_string());
        assert!(matches!(
            compose(&joke),
            Err(FetchError::Incomplete("setup/delivery"))
        ));
    }

    #[test]
    fn empty_single_joke_is_present() {
        let mut joke = api(JokeKind::Single);
        joke.joke = Some(String::new());
        assert_eq!(compose(&joke).unwrap().plain, "");
    }
}
