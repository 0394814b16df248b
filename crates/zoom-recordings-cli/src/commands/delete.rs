//! `zoom-recordings delete`: trash or permanently delete a meeting's recordings.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use zoom_recordings::{Client, DeleteMeetingRecordingsOptions};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Numeric meeting ID
    pub meeting_id: i64,

    /// Delete permanently instead of moving to the trash
    #[arg(long)]
    pub permanent: bool,
}

/// # Errors
///
/// Returns an error if the Zoom API rejects the deletion.
pub async fn run(client: &Client, args: &DeleteArgs) -> Result<()> {
    client
        .delete_meeting_recordings(&DeleteMeetingRecordingsOptions {
            meeting_id: args.meeting_id,
            delete: args.permanent,
        })
        .await
        .with_context(|| format!("failed to delete recordings of meeting {}", args.meeting_id))?;

    let action = if args.permanent {
        "Deleted"
    } else {
        "Moved to trash"
    };
    println!(
        "{} {action}: recordings of meeting {}",
        style("✓").green().bold(),
        args.meeting_id
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };
    use zoom_recordings::BearerToken;

    use super::*;

    #[tokio::test]
    async fn test_run_permanent_delete_sends_flag() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/meetings/987/recordings"))
            .and(query_param("Delete", "true"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(BearerToken::new("test-token").unwrap())
            .with_endpoint(&server.uri())
            .unwrap();
        run(
            &client,
            &DeleteArgs {
                meeting_id: 987,
                permanent: true,
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_run_reports_meeting_on_failure() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/meetings/987/recordings"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = Client::new(BearerToken::new("test-token").unwrap())
            .with_endpoint(&server.uri())
            .unwrap();
        let error = run(
            &client,
            &DeleteArgs {
                meeting_id: 987,
                permanent: false,
            },
        )
        .await
        .unwrap_err();

        assert!(error.to_string().contains("meeting 987"));
        assert!(format!("{error:#}").contains("404"));
    }
}
