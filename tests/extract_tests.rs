use shortdesc::extract::*;

mod extract_short_description_tests {
    use super::*;

    mod matches {
        use super::*;

        #[test]
        fn test_leading_template() {
            let content =
                "{{Short description|Canadian computer scientist}}\n{{Use mdy dates|date=March 2019}}";
            assert_eq!(
                extract_short_description(content),
                Some("Canadian computer scientist")
            );
        }

        #[test]
        fn test_lowercase_template_name() {
            let content = "{{short description|American actress}}";
            assert_eq!(extract_short_description(content), Some("American actress"));
        }

        #[test]
        fn test_mixed_case_template_name() {
            let content = "{{ShOrT DeScRiPtIoN|City in Japan}}";
            assert_eq!(extract_short_description(content), Some("City in Japan"));
        }

        #[test]
        fn test_template_after_other_lines() {
            let content = "{{pp-semi-indef}}\n{{Use dmy dates|date=May 2020}}\n{{Short description|Capital of France}}\n'''Paris''' is...";
            assert_eq!(extract_short_description(content), Some("Capital of France"));
        }

        #[test]
        fn test_first_template_wins() {
            let content = "{{Short description|First}}\n{{Short description|Second}}";
            assert_eq!(extract_short_description(content), Some("First"));
        }

        #[test]
        fn test_stops_at_first_closing_braces() {
            let content = "{{Short description|Footballer}} and {{cite web|url=x}}";
            assert_eq!(extract_short_description(content), Some("Footballer"));
        }

        #[test]
        fn test_extra_parameters_are_kept() {
            let content = "{{Short description|Topics referred to by the same term|noreplace}}";
            assert_eq!(
                extract_short_description(content),
                Some("Topics referred to by the same term|noreplace")
            );
        }

        #[test]
        fn test_surrounding_whitespace_is_kept() {
            let content = "{{Short description| spaced out }}";
            assert_eq!(extract_short_description(content), Some(" spaced out "));
        }

        #[test]
        fn test_empty_description() {
            let content = "{{Short description|}}";
            assert_eq!(extract_short_description(content), Some(""));
        }

        #[test]
        fn test_unicode_description() {
            let content = "{{Short description|Ville de France — préfecture}}";
            assert_eq!(
                extract_short_description(content),
                Some("Ville de France — préfecture")
            );
        }
    }

    mod no_match {
        use super::*;

        #[test]
        fn test_other_template() {
            assert_eq!(extract_short_description("{{wiktionary|Kim|kim}}"), None);
        }

        #[test]
        fn test_empty_content() {
            assert_eq!(extract_short_description(""), None);
        }

        #[test]
        fn test_plain_text_mention() {
            let content = "The short description of this article is missing.";
            assert_eq!(extract_short_description(content), None);
        }

        #[test]
        fn test_missing_pipe() {
            assert_eq!(extract_short_description("{{Short description}}"), None);
        }

        #[test]
        fn test_unclosed_template() {
            assert_eq!(extract_short_description("{{Short description|Dangling"), None);
        }

        #[test]
        fn test_template_split_across_lines() {
            let content = "{{Short description|Line one\nline two}}";
            assert_eq!(extract_short_description(content), None);
        }

        #[test]
        fn test_underscore_template_name() {
            let content = "{{Short_description|Not matched}}";
            assert_eq!(extract_short_description(content), None);
        }
    }

    #[test]
    fn test_repeated_calls_agree() {
        let content = "{{Short description|Canadian computer scientist}}";
        let first = extract_short_description(content);
        let second = extract_short_description(content);
        assert_eq!(first, second);
    }
}
