/// Resolve the configuration sync directory from its raw value.
///
/// A blank or absent value resolves to nothing. Otherwise every
/// trailing `/` and `\` is stripped, mixed runs included. An all-slash
/// value reduces to the empty string but is still returned, since the
/// pre-strip value was non-blank.
pub fn resolve_config_sync_directory(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(
        trimmed
            .trim_end_matches(|c| c == '/' || c == '\\')
            .to_string(),
    )
}
