use std::path::Path;

use crate::consts::DROP_EXTENSIONS;

/// True if `path` has one of the drag-and-drop image extensions
/// (case-insensitive).
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| DROP_EXTENSIONS.iter().any(|ok| ext.eq_ignore_ascii_case(ok)))
        .unwrap_or(false)
}

/// First path in drop order with a supported extension; the rest are ignored.
pub fn first_supported<'a, I, P>(paths: I) -> Option<&'a Path>
where
    I: IntoIterator<Item = &'a P>,
    P: AsRef<Path> + ?Sized + 'a,
{
    paths
        .into_iter()
        .map(|p| <P as AsRef<Path>>::as_ref(p))
        .find(|p| is_supported(p))
}
