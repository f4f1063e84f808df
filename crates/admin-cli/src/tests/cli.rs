use crate::Cli;
use crate::commands::Commands;
use crate::course_commands::CourseCommands;
use crate::student_commands::StudentCommands;

use admin_core::RecordId;

use clap::Parser;

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["admin", "student", "list", "--pretty", "--yes"]).unwrap();
    assert!(cli.pretty);
    assert!(cli.yes);
    assert!(cli.server.is_none());
}

#[test]
fn test_server_override() {
    let cli = Cli::try_parse_from(["admin", "--server", "http://h:1/admin", "whoami"]).unwrap();
    assert_eq!(cli.server.as_deref(), Some("http://h:1/admin"));
    assert!(matches!(cli.command, Commands::Whoami));
}

#[test]
fn test_list_args() {
    let cli = Cli::try_parse_from([
        "admin", "student", "list", "--filter", "cs", "--sort", "age", "--desc", "--page", "2",
    ])
    .unwrap();

    let Commands::Student {
        action: StudentCommands::List { args },
    } = cli.command
    else {
        panic!("expected student list");
    };
    assert_eq!(args.filter.as_deref(), Some("cs"));
    assert_eq!(args.sort.as_deref(), Some("age"));
    assert!(args.desc);
    assert_eq!(args.page, 2);
    assert!(args.page_size.is_none());
}

#[test]
fn test_desc_requires_sort() {
    assert!(Cli::try_parse_from(["admin", "student", "list", "--desc"]).is_err());
}

#[test]
fn test_negative_id_accepted() {
    let cli = Cli::try_parse_from(["admin", "professor", "delete", "-3"]).unwrap();
    let Commands::Professor { action } = cli.command else {
        panic!("expected professor command");
    };
    assert!(matches!(
        action,
        crate::professor_commands::ProfessorCommands::Delete { id } if id == RecordId(-3)
    ));
}

#[test]
fn test_non_numeric_id_rejected() {
    assert!(Cli::try_parse_from(["admin", "student", "get", "abc"]).is_err());
}

#[test]
fn test_student_add_fields() {
    let cli = Cli::try_parse_from([
        "admin",
        "student",
        "add",
        "--name",
        "Ann",
        "--email",
        "ann@uni.edu",
        "--department",
        "CS",
        "--age",
        "20",
    ])
    .unwrap();
    let Commands::Student { action } = cli.command else {
        panic!("expected student command");
    };

    assert_eq!(
        action.fields(),
        vec![
            ("name", "Ann".to_string()),
            ("email", "ann@uni.edu".to_string()),
            ("department", "CS".to_string()),
            ("age", "20".to_string()),
        ]
    );
}

#[test]
fn test_course_edit_maps_backend_field_names() {
    let cli =
        Cli::try_parse_from(["admin", "course", "edit", "4", "--price", "120"]).unwrap();
    let Commands::Course { action } = cli.command else {
        panic!("expected course command");
    };
    assert!(matches!(action, CourseCommands::Edit { .. }));
    assert_eq!(action.fields(), vec![("course_price", "120".to_string())]);
}

#[test]
fn test_login_requires_credentials() {
    assert!(Cli::try_parse_from(["admin", "login", "--email", "a@b.c"]).is_err());
}
