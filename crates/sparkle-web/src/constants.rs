// DOM hooks the page is expected to provide.

// Container for particles; usually `position: fixed; inset: 0;
// pointer-events: none`. Without it the trail stays off.
pub const LAYER_SELECTOR: &str = ".sparkle-layer";

// Footer element that receives the current year.
pub const FOOTER_YEAR_ID: &str = "year";
