use crate::{
    course_commands::CourseCommands, professor_commands::ProfessorCommands,
    student_commands::StudentCommands,
};

use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Sign in and keep the session for later commands
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in administrator
    Whoami,

    /// Ask the backend whether a token is still valid
    ValidateToken {
        /// Token to check (default: the stored session token)
        token: Option<String>,
    },

    /// Student operations
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },

    /// Professor operations
    Professor {
        #[command(subcommand)]
        action: ProfessorCommands,
    },

    /// Course operations
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },
}

/// Table options shared by every `list` subcommand.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct ListArgs {
    /// Case-insensitive substring matched against every displayed column
    #[arg(long)]
    pub filter: Option<String>,

    /// Column to sort by
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (default: list.page_size from config)
    #[arg(long)]
    pub page_size: Option<usize>,
}
