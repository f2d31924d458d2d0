use crate::har::Entry;

/// Whether a response was received at all.
///
/// HAR exporters record status 0 for failed, blocked or aborted requests.
pub fn has_response(entry: &Entry) -> bool {
    entry.response.status != 0
}

/// Whether the response is a 3xx redirection
pub fn is_redirection(entry: &Entry) -> bool {
    (300..400).contains(&entry.response.status)
}

pub fn is_non_get(entry: &Entry) -> bool {
    !entry.request.method.eq_ignore_ascii_case("GET")
}
