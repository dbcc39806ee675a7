/// Returns the text after the last `.` of a file name.
///
/// Names without a dot, names whose only dot is the leading one (`.gitignore`)
/// and names ending in a dot have no extension. Matching against the allowed
/// set is case-sensitive, so no normalization happens here.
pub fn extension_of(file_name: &str) -> Option<&str> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext)
}

pub fn is_allowed(file_name: &str, allowed: &[String]) -> bool {
    extension_of(file_name).is_some_and(|ext| allowed.iter().any(|a| a == ext))
}
