use crate::commands::ListArgs;

use admin_core::RecordId;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum StudentCommands {
    /// List students
    List {
        #[command(flatten)]
        args: ListArgs,
    },

    /// Get a student by ID
    Get {
        #[arg(allow_negative_numbers = true)]
        id: RecordId,
    },

    /// Create a student
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        department: String,

        /// Age in years (16-100)
        #[arg(long)]
        age: Option<i32>,

        /// Initial password (default: defaultPassword123)
        #[arg(long)]
        password: Option<String>,
    },

    /// Update a student; a temporary (negative) ID is created first
    Edit {
        #[arg(allow_negative_numbers = true)]
        id: RecordId,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        department: Option<String>,

        #[arg(long)]
        age: Option<i32>,
    },

    /// Delete a student
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: RecordId,
    },
}

impl StudentCommands {
    /// Form fields set by `add`/`edit`, in form order.
    pub(crate) fn fields(&self) -> Vec<(&'static str, String)> {
        let (name, email, department, age, password) = match self {
            StudentCommands::Add {
                name,
                email,
                department,
                age,
                password,
            } => (
                Some(name),
                Some(email),
                Some(department),
                age,
                password.as_ref(),
            ),
            StudentCommands::Edit {
                name,
                email,
                department,
                age,
                ..
            } => (
                name.as_ref(),
                email.as_ref(),
                department.as_ref(),
                age,
                None,
            ),
            _ => return Vec::new(),
        };

        let mut fields = Vec::new();
        push(&mut fields, "name", name);
        push(&mut fields, "email", email);
        push(&mut fields, "department", department);
        if let Some(age) = age {
            fields.push(("age", age.to_string()));
        }
        push(&mut fields, "password", password);
        fields
    }
}

pub(crate) fn push(fields: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<&String>) {
    if let Some(value) = value {
        fields.push((name, value.clone()));
    }
}
