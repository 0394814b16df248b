//! Moving recording bytes: streaming a file download and deleting a
//! meeting's recordings.

use reqwest::{Method, StatusCode, Url};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::{
    client::Client,
    error::{Error, Result},
    types::{DeleteMeetingRecordingsOptions, RecordingFile},
};

impl Client {
    /// Streams a recording file into `sink` and returns the number of bytes
    /// written.
    ///
    /// The request goes to `file.download_url` as-is rather than to the API
    /// base URL, with the client's credentials attached. The body is copied
    /// chunk by chunk, so files of any size can be written to disk without
    /// being held in memory. The response is dropped, and its connection
    /// released, on every return path.
    ///
    /// Nothing is written to `sink` unless the server answers `200 OK`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The download URL is not a valid absolute URL
    /// - The authenticator refuses the request
    /// - The HTTP request fails (network error, connection timeout, etc.)
    /// - The server answers with anything but `200 OK`
    /// - Reading the body or writing to `sink` fails
    /// - Flushing `sink` after the copy fails
    pub async fn download_recording_file<W>(
        &self,
        file: &RecordingFile,
        sink: &mut W,
    ) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let url = Url::parse(&file.download_url).map_err(|source| Error::InvalidUrl {
            url: file.download_url.clone(),
            source,
        })?;

        debug!(file_id = %file.id, "downloading recording file");
        let mut response = self.execute(self.http.get(url)).await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Download {
                file_id: file.id.clone(),
                status,
            });
        }

        let mut written: u64 = 0;
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|err| Error::Copy(std::io::Error::other(err)))?
        {
            sink.write_all(&chunk).await.map_err(Error::Copy)?;
            written += chunk.len() as u64;
        }

        sink.flush().await.map_err(Error::Release)?;

        debug!(file_id = %file.id, bytes = written, "recording file downloaded");
        Ok(written)
    }

    /// Moves a meeting's recordings to the trash, or deletes them for good
    /// when `opts.delete` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `meeting_id` is not positive
    /// - The HTTP request fails (network error, authentication failure, etc.)
    /// - The Zoom API returns a non-success status code
    pub async fn delete_meeting_recordings(
        &self,
        opts: &DeleteMeetingRecordingsOptions,
    ) -> Result<()> {
        if opts.meeting_id <= 0 {
            return Err(Error::InvalidInput(
                "meeting_id must be positive".to_string(),
            ));
        }

        let url =
            self.url_with_segments(&["meetings", &opts.meeting_id.to_string(), "recordings"])?;
        self.send_empty(Method::DELETE, url, opts).await
    }
}
