/// Provider domain; the per-data-center host is `<dc>.api.mailchimp.com`.
pub const MAILCHIMP_API_DOMAIN: &str = "api.mailchimp.com";

/// Marketing API version appended to every base URL.
pub const MAILCHIMP_API_VERSION: &str = "3.0";

/// Separates the key segment from the data-center segment in an API key (`xyz-us11`).
pub const API_KEY_SEPARATOR: char = '-';

/// Basic-Auth username sent with every request; the API key goes in the password field.
pub const BASIC_AUTH_USERNAME: &str = "";

/// Builds the base URL string for a data center, e.g. `https://us11.api.mailchimp.com/3.0`.
pub fn base_url_for(data_center: &str) -> String {
    format!("https://{data_center}.{MAILCHIMP_API_DOMAIN}/{MAILCHIMP_API_VERSION}")
}

/// Path of the members collection of an audience list.
///
/// The list id is interpolated as-is, without percent-encoding.
pub fn list_members_path(list_id: &str) -> String {
    format!("/lists/{list_id}/members/")
}

/// Member status sent when subscribing an address to a list.
pub const SUBSCRIBED_STATUS: &str = "subscribed";
