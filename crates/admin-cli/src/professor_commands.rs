use crate::commands::ListArgs;
use crate::student_commands::push;

use admin_core::RecordId;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ProfessorCommands {
    /// List professors
    List {
        #[command(flatten)]
        args: ListArgs,
    },

    /// Get a professor by ID
    Get {
        #[arg(allow_negative_numbers = true)]
        id: RecordId,
    },

    /// Create a professor
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        department: String,

        /// Initial password (default: defaultPassword123)
        #[arg(long)]
        password: Option<String>,
    },

    /// Update a professor; a temporary (negative) ID is created first
    Edit {
        #[arg(allow_negative_numbers = true)]
        id: RecordId,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        department: Option<String>,
    },

    /// Delete a professor
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: RecordId,
    },
}

impl ProfessorCommands {
    pub(crate) fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        match self {
            ProfessorCommands::Add {
                name,
                email,
                department,
                password,
            } => {
                push(&mut fields, "name", Some(name));
                push(&mut fields, "email", Some(email));
                push(&mut fields, "department", Some(department));
                push(&mut fields, "password", password.as_ref());
            }
            ProfessorCommands::Edit {
                name,
                email,
                department,
                ..
            } => {
                push(&mut fields, "name", name.as_ref());
                push(&mut fields, "email", email.as_ref());
                push(&mut fields, "department", department.as_ref());
            }
            _ => {}
        }
        fields
    }
}
