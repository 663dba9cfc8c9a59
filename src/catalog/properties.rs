//! Static prefix → canonical-property table and the curated category lists.
//!
//! Kept as a plain data module (no lazy statics) since `PropertyCatalog::new`
//! only runs once per engine and the table itself never mutates.

use super::Category;

/// `(utility prefix, canonical CSS property)`. Several prefixes may point
/// at the same canonical name — e.g. `p` and `padding` both resolve to
/// `padding`. Longer/more specific prefixes (`border-color`) must be listed
/// alongside their shorter relatives (`border`) so the longest-match
/// tie-break in [`super::PropertyCatalog::longest_match`] has both to choose
/// from.
pub(super) const PREFIX_TABLE: &[(&str, &str)] = &[
    // Spacing
    ("p", "padding"),
    ("padding", "padding"),
    ("pt", "padding-top"),
    ("pr", "padding-right"),
    ("pb", "padding-bottom"),
    ("pl", "padding-left"),
    ("px", "padding-inline"),
    ("py", "padding-block"),
    ("m", "margin"),
    ("margin", "margin"),
    ("mt", "margin-top"),
    ("mr", "margin-right"),
    ("mb", "margin-bottom"),
    ("ml", "margin-left"),
    ("mx", "margin-inline"),
    ("my", "margin-block"),
    ("gap", "gap"),
    ("gap-x", "column-gap"),
    ("gap-y", "row-gap"),
    // Sizing
    ("w", "width"),
    ("width", "width"),
    ("h", "height"),
    ("height", "height"),
    ("min-w", "min-width"),
    ("max-w", "max-width"),
    ("min-h", "min-height"),
    ("max-h", "max-height"),
    // Positioning
    ("top", "top"),
    ("right", "right"),
    ("bottom", "bottom"),
    ("left", "left"),
    ("inset", "inset"),
    ("inset-x", "inset-inline"),
    ("inset-y", "inset-block"),
    ("z", "z-index"),
    ("position", "position"),
    // Color
    ("bg", "background"),
    ("bg-color", "background-color"),
    ("background", "background"),
    ("background-color", "background-color"),
    ("text-color", "color"),
    ("border-color", "border-color"),
    ("outline-color", "outline-color"),
    ("fill", "fill"),
    ("stroke", "stroke"),
    ("accent", "accent-color"),
    ("caret", "caret-color"),
    // Typography
    ("text", "color"),
    ("font-size", "font-size"),
    ("font-weight", "font-weight"),
    ("font-family", "font-family"),
    ("font", "font-family"),
    ("leading", "line-height"),
    ("line-height", "line-height"),
    ("tracking", "letter-spacing"),
    ("letter-spacing", "letter-spacing"),
    ("text-indent", "text-indent"),
    ("indent", "text-indent"),
    ("text-decoration", "text-decoration"),
    ("text-align", "text-align"),
    ("white-space", "white-space"),
    ("word-break", "word-break"),
    // Borders
    ("border-width", "border-width"),
    ("border", "border"),
    ("border-radius", "border-radius"),
    ("rounded", "border-radius"),
    ("border-style", "border-style"),
    // Layout
    ("display", "display"),
    ("overflow", "overflow"),
    ("visibility", "visibility"),
    ("float", "float"),
    ("clear", "clear"),
    ("box-sizing", "box-sizing"),
    ("object-fit", "object-fit"),
    ("object-position", "object-position"),
    // Flexbox / grid
    ("flex-direction", "flex-direction"),
    ("flex-wrap", "flex-wrap"),
    ("flex-basis", "flex-basis"),
    ("flex-grow", "flex-grow"),
    ("flex-shrink", "flex-shrink"),
    ("flex", "flex"),
    ("justify-content", "justify-content"),
    ("justify-items", "justify-items"),
    ("align-items", "align-items"),
    ("align-content", "align-content"),
    ("align-self", "align-self"),
    ("order", "order"),
    ("grid-template-columns", "grid-template-columns"),
    ("grid-template-rows", "grid-template-rows"),
    ("grid-column", "grid-column"),
    ("grid-row", "grid-row"),
    ("grid-auto-flow", "grid-auto-flow"),
    // Effects / misc complex
    ("opacity", "opacity"),
    ("box-shadow", "box-shadow"),
    ("shadow", "box-shadow"),
    ("transform", "transform"),
    ("transform-origin", "transform-origin"),
    ("transition", "transition"),
    ("animation", "animation"),
    ("filter", "filter"),
    ("backdrop-filter", "backdrop-filter"),
    ("clip-path", "clip-path"),
    ("mask", "mask"),
    ("cursor", "cursor"),
    ("pointer-events", "pointer-events"),
    ("user-select", "user-select"),
    ("resize", "resize"),
    ("outline", "outline"),
    ("outline-offset", "outline-offset"),
    ("aspect-ratio", "aspect-ratio"),
    ("content", "content"),
];

/// Properties validated against an exact name match before any suffix or
/// prefix rule runs (§4.1, rule 1).
pub(super) const EXACT_CATEGORY: &[(&str, Category)] = &[
    ("opacity", Category::Number),
    ("z-index", Category::Number),
    ("order", Category::Number),
    ("flex-grow", Category::Number),
    ("flex-shrink", Category::Number),
    ("aspect-ratio", Category::Number),
    ("line-height", Category::Length),
    ("font-weight", Category::Keyword),
    ("content", Category::Keyword),
];

/// Curated KEYWORD properties (§4.1, rule 4): identifier-only values with
/// no further structural validation beyond the identifier shape.
pub(super) const KEYWORD_PROPERTIES: &[&str] = &[
    "display",
    "position",
    "visibility",
    "overflow",
    "float",
    "clear",
    "box-sizing",
    "object-fit",
    "text-align",
    "text-decoration-line",
    "white-space",
    "word-break",
    "flex-direction",
    "flex-wrap",
    "justify-content",
    "justify-items",
    "align-items",
    "align-content",
    "align-self",
    "grid-auto-flow",
    "cursor",
    "pointer-events",
    "user-select",
    "resize",
    "border-style",
];

/// Curated COMPLEX properties (§4.1, rule 5): accept any of the simpler
/// categories or a recognized CSS function.
pub(super) const COMPLEX_PROPERTIES: &[&str] = &[
    "transform",
    "transform-origin",
    "box-shadow",
    "background",
    "border",
    "transition",
    "animation",
    "filter",
    "backdrop-filter",
    "clip-path",
    "mask",
    "object-position",
    "font-family",
    "outline",
];

/// Properties whose value accepts a comma/space-separated multi-value
/// sequence (§9 note: membership here is independent of `Category`).
pub(super) const SHORTHAND_PROPERTIES: &[&str] = &[
    "padding",
    "margin",
    "border",
    "border-width",
    "border-radius",
    "background-position",
    "background-size",
    "flex",
    "grid-template-columns",
    "grid-template-rows",
    "grid-column",
    "grid-row",
    "text-decoration",
    "transform-origin",
    "transition",
    "animation",
    "box-shadow",
    "inset",
];
