#[cfg(test)]
mod tests {
    use address_book_cli::actions::{check_field, describe_policy, run_command_line};
    use address_book_cli::cli_args::{Action, Args};
    use address_book_core::error::Error;
    use address_book_core::messages::invalid_command_format;
    use address_book_core::commands::SelectContactCommand;
    use address_book_core::model::policy::{PolicyField, COMMISSION_MESSAGE_CONSTRAINTS};
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_run_from_parsed_args() {
        let args = Args::parse_from(["ab", "run", "-c", "Alex", "-c", "Bernice", "select", "1"]);
        let Action::Run {
            contacts,
            dry_run,
            input,
        } = args.action
        else {
            panic!("Expected Run action");
        };

        let output = run_command_line(&contacts, dry_run, &input).unwrap();
        assert_eq!(output, "Selected contact: Alex");
    }

    #[test]
    fn test_run_reports_select_usage() {
        let error = run_command_line(&[], false, &strings(&["select", "-1"])).unwrap_err();
        assert_eq!(
            error.to_string(),
            invalid_command_format(SelectContactCommand::MESSAGE_USAGE)
        );
    }

    #[test]
    fn test_run_index_past_end() {
        let contacts = strings(&["Alex"]);
        let error = run_command_line(&contacts, false, &strings(&["select", "2"])).unwrap_err();
        assert!(matches!(error, Error::InvalidContactIndex { index: 2, len: 1 }));
    }

    #[test]
    fn test_run_unknown_command() {
        let error = run_command_line(&[], false, &strings(&["list"])).unwrap_err();
        assert!(matches!(error, Error::UnknownCommand(word) if word == "list"));
    }

    #[test]
    fn test_describe_policy_from_fields() {
        let output =
            describe_policy(None, Some("AIA"), Some("123"), Some("Term Life"), Some("12.5")).unwrap();
        assert_eq!(
            output,
            "Insurer: AIA; Policy ID: 123; Policy Name: Term Life; Commission: 12.5"
        );
    }

    #[test]
    fn test_describe_policy_missing_field() {
        let error = describe_policy(None, Some("AIA"), None, Some("Term Life"), Some("1")).unwrap_err();
        assert!(matches!(error, Error::NullArgument { argument: "number" }));
    }

    #[test]
    fn test_describe_policy_invalid_commission() {
        let error =
            describe_policy(None, Some("AIA"), Some("1"), Some("Plan"), Some("ten")).unwrap_err();
        assert_eq!(error.to_string(), COMMISSION_MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_describe_policy_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "insurer: \"Prudential\"\nnumber: \"9\"\nname: \"Critical Illness\"\ncommission: \"0.75\"\n"
        )
        .unwrap();
        let temp_path = temp_file.path().to_str().unwrap().to_string();

        let output = describe_policy(Some(&temp_path), None, None, None, None).unwrap();
        assert_eq!(
            output,
            "Insurer: Prudential; Policy ID: 9; Policy Name: Critical Illness; Commission: 0.75"
        );
    }

    #[test]
    fn test_check_every_field() {
        assert!(check_field(PolicyField::Insurer, "AIA").is_ok());
        assert!(check_field(PolicyField::Name, "A1 b2").is_ok());
        assert!(check_field(PolicyField::Number, "123").is_ok());
        assert!(check_field(PolicyField::Commission, "1.2.3").is_err());
        assert!(check_field(PolicyField::Name, "").is_err());
    }
}
