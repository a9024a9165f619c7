#[cfg(test)]
mod integration_tests {

    use crate::{Normalizer, NormalizerConfig, Profile, Tokenizer};

    const URL_TEXT: &str = "ببینید https://example.com/a_b?x=1 و http://news.ir:8080/fa را";

    #[test]
    fn normalize_then_tokenize() {
        let normalizer = Normalizer::new().unwrap();
        let tokenizer = Tokenizer::new().unwrap();

        let text = normalizer
            .cleanup("اين كتاب ها  را مي خوانم!!! تو چه مي خواني؟")
            .unwrap();
        assert_eq!(
            text,
            "این کتاب\u{200C}ها را می\u{200C}خوانم! تو چه می\u{200C}خوانی؟"
        );

        let tokens = tokenizer.tokenize(&text);
        assert_eq!(
            tokens,
            [
                vec!["این", "کتاب\u{200C}ها", "را", "می\u{200C}خوانم", "!"],
                vec!["تو", "چه", "می\u{200C}خوانی", "؟"],
            ]
        );
    }

    #[test]
    fn urls_survive_every_profile() {
        for name in ["standard", "conservative", "characters_only", "spacing_only"] {
            let normalizer = Profile::by_name(name).unwrap().build().unwrap();
            let out = normalizer.cleanup(URL_TEXT).unwrap();
            let first = out.find("https://example.com/a_b?x=1");
            let second = out.find("http://news.ir:8080/fa");
            assert!(first.is_some() && second.is_some(), "{name}: {out}");
            assert!(first < second, "{name}: urls swapped in {out}");
        }
    }

    #[test]
    fn urls_survive_disabled_config() {
        let normalizer = Normalizer::with_config(NormalizerConfig::disabled()).unwrap();
        assert_eq!(normalizer.cleanup(URL_TEXT).unwrap(), URL_TEXT);
    }

    #[test]
    fn url_digits_stay_ascii_while_text_digits_change() {
        let normalizer = Normalizer::new().unwrap();
        assert_eq!(
            normalizer.cleanup("صفحه 5 در http://a.ir/p/12").unwrap(),
            "صفحه ۵ در http://a.ir/p/12"
        );
    }

    #[test]
    fn json_config_drives_the_pipeline() {
        let config = NormalizerConfig::from_json(r#"{ "fix_english_numbers": false }"#).unwrap();
        let normalizer = Normalizer::with_config(config).unwrap();
        assert_eq!(normalizer.cleanup("سال 1402").unwrap(), "سال 1402");
        assert!(!normalizer.stage_names().any(|name| name == "fix_english_numbers"));
    }

    #[test]
    fn shared_across_threads() {
        let normalizer = Normalizer::new().unwrap();
        let tokenizer = Tokenizer::new().unwrap();

        std::thread::scope(|scope| {
            for i in 0..4 {
                let normalizer = &normalizer;
                let tokenizer = &tokenizer;
                scope.spawn(move || {
                    let input = format!("مي خوانم {i}. كتاب ها");
                    let text = normalizer.cleanup(input.as_str()).unwrap();
                    let sentences = tokenizer.split_sentences(&text);
                    assert_eq!(sentences.len(), 2);
                    assert_eq!(sentences[1], "کتاب\u{200C}ها");
                });
            }
        });
    }

    #[test]
    fn tokenizer_sees_line_breaks() {
        let normalizer = Normalizer::new().unwrap();
        let tokenizer = Tokenizer::new().unwrap();
        let text = normalizer.cleanup("عنوان  \n\n  متن اول. متن دوم").unwrap();
        assert_eq!(text, "عنوان\n\nمتن اول. متن دوم");
        assert_eq!(
            tokenizer.split_sentences(&text),
            ["عنوان", "متن اول.", "متن دوم"]
        );
    }
}
