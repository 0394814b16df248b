//! Recording listings: `GET /users/{userId}/recordings` and
//! `GET /meetings/{meetingId}/recordings`.

use crate::{
    client::Client,
    error::{Error, Result},
    types::{
        CloudRecordingMeeting, ListAllRecordingsOptions, ListAllRecordingsResponse, MeetingRef,
    },
};

impl Client {
    /// Lists one page of cloud recordings for a user.
    ///
    /// Only one page is fetched. Pass the returned `next_page_token` back in
    /// `opts` until it comes back empty to walk the full listing.
    ///
    /// Zoom limits the served range to 30 days without reporting it; compare
    /// the response's `from`/`to` with the requested range if that matters.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `user_id` is empty or contains only whitespace
    /// - The HTTP request fails (network error, authentication failure, etc.)
    /// - The Zoom API returns a non-success status code
    /// - The response body cannot be parsed
    pub async fn list_all_recordings(
        &self,
        opts: &ListAllRecordingsOptions,
    ) -> Result<ListAllRecordingsResponse> {
        if opts.user_id.trim().is_empty() {
            return Err(Error::InvalidInput("user_id must not be empty".to_string()));
        }

        let url = self.url_with_segments(&["users", &opts.user_id, "recordings"])?;
        self.get_json(url, opts).await
    }

    /// Fetches every recording file of one meeting.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The meeting ID is not positive, or the UUID is empty
    /// - The HTTP request fails (network error, authentication failure, etc.)
    /// - The Zoom API returns a non-success status code
    /// - The response body cannot be parsed
    pub async fn get_meeting_recordings(
        &self,
        meeting: &MeetingRef,
    ) -> Result<CloudRecordingMeeting> {
        let segment = meeting.path_segment()?;
        let url = self.url_with_segments(&["meetings", &segment, "recordings"])?;
        self.get_json(url, &[] as &[(&str, &str)]).await
    }
}
