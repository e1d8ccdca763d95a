use colored::*;
use dynlist_core::Status;

/// Render one table row per status code
pub fn rows() -> Vec<String> {
    Status::ALL
        .iter()
        .map(|status| {
            format!(
                "{:>4}  {:<16} {}",
                status.code(),
                format!("{:?}", status),
                status.describe()
            )
        })
        .collect()
}

pub fn execute() {
    println!("\n=== Status Codes ===");
    for (status, row) in Status::ALL.iter().zip(rows()) {
        if status.is_error() {
            println!("{}", row.red());
        } else if status.is_ok() {
            println!("{}", row.green());
        } else {
            println!("{}", row);
        }
    }
}
