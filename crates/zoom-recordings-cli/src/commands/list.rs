//! `zoom-recordings list`: one page of a user's cloud recordings.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use console::style;
use zoom_recordings::{Client, ListAllRecordingsOptions, ListAllRecordingsResponse, TrashType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Table,
    /// The raw response as pretty-printed JSON
    Json,
}

/// Command-line arguments for the list command.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// User ID or email address; `me` for the token's owner
    #[arg(short, long, default_value = "me")]
    pub user: String,

    /// Start date, `YYYY-MM-DD`
    #[arg(long)]
    pub from: Option<String>,

    /// End date, `YYYY-MM-DD` (Zoom serves at most 30 days per request)
    #[arg(long)]
    pub to: Option<String>,

    /// Records per page (Zoom allows up to 300)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Token from a previous page
    #[arg(long)]
    pub next_page_token: Option<String>,

    /// Query metadata pass-through (`mc`), sent as given
    #[arg(long)]
    pub mc: Option<String>,

    /// List recordings in the trash
    #[arg(long)]
    pub trash: bool,

    /// Trash listing kind: `meeting_recordings` or `recording_file`
    #[arg(long, requires = "trash")]
    pub trash_type: Option<TrashType>,

    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl ListArgs {
    pub fn options(&self) -> ListAllRecordingsOptions {
        ListAllRecordingsOptions {
            page_size: self.page_size,
            next_page_token: self.next_page_token.clone().unwrap_or_default(),
            mc: self.mc.clone().unwrap_or_default(),
            trash: self.trash,
            from: self.from.clone().unwrap_or_default(),
            to: self.to.clone().unwrap_or_default(),
            trash_type: self.trash_type,
            ..ListAllRecordingsOptions::new(self.user.clone())
        }
    }
}

/// Fetches one page and prints it in the requested format.
///
/// # Errors
///
/// Returns an error if the Zoom API request fails or the JSON output cannot be
/// serialized.
pub async fn run(client: &Client, args: &ListArgs) -> Result<()> {
    let response = client
        .list_all_recordings(&args.options())
        .await
        .with_context(|| format!("failed to list recordings for user '{}'", args.user))?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&response)
                .context("failed to serialize recordings")?;
            println!("{json}");
        }
        OutputFormat::Table => print!("{}", render_table(&response)),
    }

    Ok(())
}

fn render_table(response: &ListAllRecordingsResponse) -> String {
    let mut out = String::new();

    if response.meetings.is_empty() {
        let _ = writeln!(out, "{}", style("No recordings found").dim());
    }

    for meeting in &response.meetings {
        let _ = writeln!(
            out,
            "{} {} {}",
            style(meeting.start_time.as_deref().unwrap_or("-")).dim(),
            style(&meeting.topic).bold(),
            style(format!("({})", meeting.uuid)).dim(),
        );
        for file in &meeting.recording_files {
            let kind = file
                .recording_type
                .map_or(file.file_type.as_str(), |kind| kind.as_str());
            let _ = writeln!(
                out,
                "  {:<40} {:<6} {:>10}  {}",
                kind,
                file.file_extension,
                format_size(file.file_size),
                style(&file.id).cyan(),
            );
        }
    }

    let _ = writeln!(
        out,
        "\n{} of {} meeting(s)",
        response.meetings.len(),
        response.total_records
    );
    if response.has_next_page() {
        let _ = writeln!(
            out,
            "More results: --next-page-token {}",
            response.next_page_token
        );
    }

    out
}

fn format_size(bytes: i64) -> String {
    const KIB: i64 = 1024;
    const MIB: i64 = 1024 * KIB;
    const GIB: i64 = 1024 * MIB;

    let (unit, name) = match bytes {
        b if b >= GIB => (GIB, "GiB"),
        b if b >= MIB => (MIB, "MiB"),
        b if b >= KIB => (KIB, "KiB"),
        _ => return format!("{bytes} B"),
    };
    format!("{}.{} {name}", bytes / unit, (bytes % unit) * 10 / unit)
}
