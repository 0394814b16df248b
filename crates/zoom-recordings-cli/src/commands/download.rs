//! `zoom-recordings download`: save a meeting's recording files to disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use console::style;
use tokio::{fs, io::BufWriter};
use tracing::info;
use zoom_recordings::{Client, MeetingRef, RecordingFile};

/// Command-line arguments for the download command.
#[derive(Debug, Args)]
pub struct DownloadArgs {
    /// Numeric meeting ID or meeting instance UUID
    pub meeting: MeetingRef,

    /// Only download the file with this ID
    #[arg(long)]
    pub file_id: Option<String>,

    /// Directory the files are written to
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

/// Downloads the selected recording files of a meeting into `args.output`.
///
/// Files are streamed straight to disk. A failed download leaves its partial
/// file behind and stops the command.
///
/// # Errors
///
/// Returns an error if:
/// - The meeting's recordings cannot be fetched
/// - `--file-id` matches none of the meeting's files
/// - The output directory or a file cannot be created
/// - A download fails
pub async fn run(client: &Client, args: &DownloadArgs) -> Result<()> {
    let meeting = client
        .get_meeting_recordings(&args.meeting)
        .await
        .context("failed to fetch meeting recordings")?;

    let files: Vec<&RecordingFile> = meeting
        .recording_files
        .iter()
        .filter(|file| args.file_id.as_ref().is_none_or(|id| &file.id == id))
        .collect();

    if files.is_empty() {
        match &args.file_id {
            Some(id) => bail!("meeting has no recording file with id '{id}'"),
            None => bail!("meeting has no recording files"),
        }
    }

    fs::create_dir_all(&args.output)
        .await
        .with_context(|| format!("failed to create {}", args.output.display()))?;

    for file in files {
        let path = args.output.join(file_name(file));
        let bytes = download_to(client, file, &path).await?;

        info!(file_id = %file.id, path = %path.display(), bytes, "saved recording file");
        println!(
            "{} {} ({bytes} bytes)",
            style("✓").green().bold(),
            path.display()
        );
    }

    Ok(())
}

async fn download_to(client: &Client, file: &RecordingFile, path: &Path) -> Result<u64> {
    let out = fs::File::create(path)
        .await
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(out);

    client
        .download_recording_file(file, &mut out)
        .await
        .with_context(|| format!("failed to download recording file {}", file.id))
}

/// `{id}.{extension}` with path separators removed from the ID.
fn file_name(file: &RecordingFile) -> String {
    let id: String = file
        .id
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();

    if file.file_extension.is_empty() {
        id
    } else {
        format!("{id}.{}", file.file_extension.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };
    use zoom_recordings::BearerToken;

    use super::*;

    fn client_for(server: &MockServer) -> Client {
        Client::new(BearerToken::new("test-token").unwrap())
            .with_endpoint(&server.uri())
            .unwrap()
    }

    async fn mount_meeting(server: &MockServer) {
        let body = format!(
            r#"{{
              "uuid": "uuid-1==",
              "id": 123,
              "recording_files": [
                {{ "id": "video", "file_extension": "MP4", "download_url": "{uri}/rec/video" }},
                {{ "id": "chat", "file_extension": "TXT", "download_url": "{uri}/rec/chat" }}
              ]
            }}"#,
            uri = server.uri()
        );

        Mock::given(method("GET"))
            .and(path("/meetings/123/recordings"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rec/video"))
            .respond_with(ResponseTemplate::new(200).set_body_string("video bytes"))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rec/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
            .mount(server)
            .await;
    }

    #[test]
    fn test_file_name_uses_lowercase_extension() {
        let file = RecordingFile {
            id: "abc".to_string(),
            file_extension: "MP4".to_string(),
            ..RecordingFile::default()
        };
        assert_eq!(file_name(&file), "abc.mp4");
    }

    #[test]
    fn test_file_name_strips_path_separators() {
        let file = RecordingFile {
            id: "../etc/passwd".to_string(),
            ..RecordingFile::default()
        };
        assert_eq!(file_name(&file), ".._etc_passwd");
    }

    #[tokio::test]
    async fn test_run_downloads_every_file() {
        let server = MockServer::start().await;
        mount_meeting(&server).await;
        let temp = TempDir::new().unwrap();

        let args = DownloadArgs {
            meeting: MeetingRef::Id(123),
            file_id: None,
            output: temp.path().join("out"),
        };
        run(&client_for(&server), &args).await.unwrap();

        let video = std::fs::read_to_string(temp.path().join("out/video.mp4")).unwrap();
        let chat = std::fs::read_to_string(temp.path().join("out/chat.txt")).unwrap();
        assert_eq!(video, "video bytes");
        assert_eq!(chat, "hello");
    }

    #[tokio::test]
    async fn test_run_downloads_only_selected_file() {
        let server = MockServer::start().await;
        mount_meeting(&server).await;
        let temp = TempDir::new().unwrap();

        let args = DownloadArgs {
            meeting: MeetingRef::Id(123),
            file_id: Some("chat".to_string()),
            output: temp.path().to_path_buf(),
        };
        run(&client_for(&server), &args).await.unwrap();

        assert!(temp.path().join("chat.txt").exists());
        assert!(!temp.path().join("video.mp4").exists());
    }

    #[tokio::test]
    async fn test_run_unknown_file_id_fails() {
        let server = MockServer::start().await;
        mount_meeting(&server).await;
        let temp = TempDir::new().unwrap();

        let args = DownloadArgs {
            meeting: MeetingRef::Id(123),
            file_id: Some("missing".to_string()),
            output: temp.path().to_path_buf(),
        };
        let error = run(&client_for(&server), &args).await.unwrap_err();

        assert!(error.to_string().contains("no recording file with id 'missing'"));
    }
}
