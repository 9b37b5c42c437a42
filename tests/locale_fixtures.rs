#[cfg(test)]
mod tests {
    use locale_number_guide::format_number;
    use locale_number_guide::types::FormatOptions;
    use serde::Deserialize;
    use std::fs;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Deserialize)]
    struct LocaleCase {
        value: f64,
        locale: String,
        currency: Option<String>,
        min: Option<u32>,
        max: Option<u32>,
        expected: String,
    }

    #[derive(Debug, Deserialize)]
    struct LocaleCases {
        cases: Vec<LocaleCase>,
    }

    impl LocaleCase {
        fn options(&self) -> FormatOptions {
            let mut options = match &self.currency {
                Some(code) => FormatOptions::currency(code.as_str()),
                None => FormatOptions::decimal(),
            };
            options.minimum_fraction_digits = self.min;
            options.maximum_fraction_digits = self.max;
            options
        }
    }

    fn run_case(case: &LocaleCase) -> Result<(), String> {
        let result = format_number(case.value, &case.locale, &case.options())
            .map_err(|e| format!("Format error for {} in {}: {e}", case.value, case.locale))?;

        if result != case.expected {
            return Err(format!(
                "\n✗ Mismatch for value: {}\nLocale:     {}\nCurrency:   {:?}\nExpected:   {:?}\nActual:     {:?}",
                case.value, case.locale, case.currency, case.expected, result
            ));
        }

        Ok(())
    }

    fn load_cases() -> LocaleCases {
        let toml_path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("locale_cases.toml");

        let toml_content = fs::read_to_string(&toml_path)
            .unwrap_or_else(|e| panic!("Failed to read TOML file {}: {}", toml_path.display(), e));

        toml::from_str(&toml_content)
            .unwrap_or_else(|e| panic!("Failed to parse TOML file {}: {}", toml_path.display(), e))
    }

    #[test]
    fn test_locale_fixture_cases() {
        let suite = load_cases();
        assert!(!suite.cases.is_empty());

        let failures: Vec<String> = suite
            .cases
            .iter()
            .enumerate()
            .filter_map(|(i, case)| run_case(case).err().map(|msg| format!("[Case {}] {msg}", i + 1)))
            .collect();

        assert!(failures.is_empty(), "{}", failures.join("\n"));
    }
}
