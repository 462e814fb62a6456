// Setup gate for the trail. Kept free of web-sys so the missing-layer path
// can be tested on the host.

/// Run `wire` with the layer if the page has one.
///
/// Returns `Ok(false)` without calling `wire` when `layer` is `None`; the
/// trail is then off and nothing is attached.
pub fn wire_if_present<L, E, F>(layer: Option<L>, wire: F) -> Result<bool, E>
where
    F: FnOnce(L) -> Result<(), E>,
{
    match layer {
        Some(l) => wire(l).map(|()| true),
        None => Ok(false),
    }
}
