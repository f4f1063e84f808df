use crate::commands::ListArgs;
use crate::student_commands::push;

use admin_core::RecordId;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CourseCommands {
    /// List courses
    List {
        #[command(flatten)]
        args: ListArgs,
    },

    /// Get a course by ID
    Get {
        #[arg(allow_negative_numbers = true)]
        id: RecordId,
    },

    /// Create a course
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        field: String,

        /// Free text, e.g. "12 weeks"
        #[arg(long)]
        duration: String,

        #[arg(long)]
        price: String,
    },

    /// Update a course
    Edit {
        #[arg(allow_negative_numbers = true)]
        id: RecordId,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        field: Option<String>,

        #[arg(long)]
        duration: Option<String>,

        #[arg(long)]
        price: Option<String>,
    },

    /// Delete a course
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: RecordId,
    },
}

impl CourseCommands {
    pub(crate) fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        match self {
            CourseCommands::Add {
                name,
                field,
                duration,
                price,
            } => {
                push(&mut fields, "course_name", Some(name));
                push(&mut fields, "course_field", Some(field));
                push(&mut fields, "course_duration", Some(duration));
                push(&mut fields, "course_price", Some(price));
            }
            CourseCommands::Edit {
                name,
                field,
                duration,
                price,
                ..
            } => {
                push(&mut fields, "course_name", name.as_ref());
                push(&mut fields, "course_field", field.as_ref());
                push(&mut fields, "course_duration", duration.as_ref());
                push(&mut fields, "course_price", price.as_ref());
            }
            _ => {}
        }
        fields
    }
}
