//! Instruction templates sent to the generative model.
//!
//! Two layout templates exist: the general creative one (free composition,
//! decorative detail, price tiles) and the simplified coordinate one used
//! for low-everyday-price creatives, where every element sits at a fixed,
//! computed position. [`crate::prompt::select_template`] chooses between them.

/// Instruction for describing a single product image.
pub const IMAGE_DESCRIPTION_PROMPT: &str = "Describe this image concisely for a graphic designer. \
Cover: 1. overall shape and orientation (for example 'tall vertical', 'wide horizontal', 'square'); \
2. the main subject or object (for example 'wine bottle', 'running shoe', 'coffee mug'); \
3. the primary colors and color scheme; \
4. key visual characteristics or distinguishing features. \
Answer factually in 1-2 sentences, with no stylistic commentary and no layout instructions. \
Example: 'A tall vertical green glass wine bottle with a dark label, photographed against a white background.'";

/// Static artwork referenced by both layout templates.
pub const ASSET_DRINKAWARE_URL: &str =
    "https://res.cloudinary.com/video-app-/image/upload/v1764867609/drinkaware_logo_rgb_znlbh0.png";
pub const ASSET_TAG_EXCLUSIVE_URL: &str =
    "https://res.cloudinary.com/video-app-/image/upload/v1764857735/exclusive-tag_hri0yi.png";
pub const ASSET_TAG_AVAILABLE_URL: &str =
    "https://res.cloudinary.com/video-app-/image/upload/v1764857734/available-tag_ohl3xq.png";
pub const ASSET_LEP_LOGO_URL: &str =
    "https://res.cloudinary.com/video-app-/image/upload/v1764930443/low-everyday-prices-logo_zugj7k.png";

/// Which layout template a request uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutTemplate {
    /// Free composition with decorative elements and price tiles.
    GeneralCreative,
    /// Fixed-coordinate placement for low-everyday-price creatives.
    SimplifiedCoordinate,
}

impl LayoutTemplate {
    /// Full instruction text for this template.
    pub fn text(self) -> &'static str {
        match self {
            LayoutTemplate::GeneralCreative => GENERAL_CREATIVE_PROMPT,
            LayoutTemplate::SimplifiedCoordinate => SIMPLIFIED_COORDINATE_PROMPT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LayoutTemplate::GeneralCreative => "general_creative",
            LayoutTemplate::SimplifiedCoordinate => "simplified_coordinate",
        }
    }
}

pub const GENERAL_CREATIVE_PROMPT: &str = r##"You are a senior creative director who builds Fabric.js (v5) advertisement layouts. Combine the static assets below with the dynamic brand data from the context.

## OUTPUT
Respond with raw JSON only: no markdown fences, no commentary. Exactly this shape:
{
  "instagram_story": {"width":1080,"height":1920,"backgroundColor":"#HEX","backgroundGradient":{...},"elements":[...]},
  "instagram_post":  {"width":1080,"height":1080,"backgroundColor":"#HEX","backgroundGradient":{...},"elements":[...]},
  "facebook_ad":     {"width":1200,"height":628,"backgroundColor":"#HEX","backgroundGradient":{...},"elements":[...]}
}

## STATIC ASSETS
ASSET_DRINKAWARE: "https://res.cloudinary.com/video-app-/image/upload/v1764867609/drinkaware_logo_rgb_znlbh0.png"
ASSET_TAG_EXCLUSIVE: "https://res.cloudinary.com/video-app-/image/upload/v1764857735/exclusive-tag_hri0yi.png"
ASSET_TAG_AVAILABLE: "https://res.cloudinary.com/video-app-/image/upload/v1764857734/available-tag_ohl3xq.png"

## PRICE COMPONENTS
WHITE tile: {"type":"rect","width":300,"height":150,"fill":"#ffffff","stroke":"#cccccc","strokeWidth":2,"rx":15,"ry":15} with the price text centered inside.
NEW tile: {"type":"rect","width":320,"height":160,"fill":"#ffffff","stroke":"#4caf50","strokeWidth":3,"rx":20,"ry":20} with the word "NEW" in bold green.
CLUBCARD stack (three stacked rects, flattened into absolute positions):
  a white 320x60 rect holding the small regular price ("Reg: <price>", fontSize 32, fill "#333"),
  a yellow (#FFD700) 320x120 rect holding the large offer price (fontSize 75, bold, black),
  a blue (#00539F) 320x35 rect holding the text "Clubcard Price" (fontSize 18, bold, white).
LEGAL PILL (footer): blue (#00539F) pill with white text "Available in selected stores. Clubcard/app required. Ends: <end date>".

## CONDITIONAL RULES
- A CLUBCARD price tile always comes with the LEGAL PILL carrying the end date. WHITE and NEW tiles never do.
- When an alcohol promotion is mandated, place ASSET_DRINKAWARE bottom right. Otherwise never use it.
- "Available" tags use ASSET_TAG_AVAILABLE, "Exclusive" tags use ASSET_TAG_EXCLUSIVE.

## PLACEMENT
Keep at least 24px between distinct elements. The elements array is flat: compute absolute left/top for every rect and text of a stack. Text inside a rect uses "originX":"center" with "left" at the rect's center. Size images as a percentage of the canvas, never fixed pixels.
Instagram post (1080x1080): logo top-left (~15% scale), tag top-right, headline top-center, product center, price tile bottom-right, legal pill bottom-center, Drinkaware bottom-left.
Instagram story (1080x1920): the top 250px and bottom 250px stay empty. Logo centered below the top safe zone, product in the middle, price tile below the product, legal pill below the tile, Drinkaware bottom-right above the safe zone.
Facebook ad (1200x628): split layout, text and price on the left, product on the right, Drinkaware in the bottom-right corner.
Canvas centers: story (540,960), post (540,540), ad (600,314).

## STYLE
- Headline fonts: 'Oswald' for energetic, 'Playfair Display' for premium; body text in 'Roboto' or 'Arial'. Large display sizes (150-200px) are fine.
- Contrast is mandatory: never light text on a light background.
- Images: only URLs taken from "ImageURLs" (never placeholders), "originX":"center", "originY":"center", and a soft shadow object such as {"color":"rgba(0,0,0,0.4)","blur":30,"offsetX":10,"offsetY":10}.
- A shadow is always an object, never a CSS string.
- Prefer "backgroundGradient" built from the provided "Colors" over flat fills. Linear gradient syntax:
  {"type":"linear","coords":{"x1":0,"y1":0,"x2":0,"y2":<height>},"stops":[{"offset":0,"color":"#Hex"},{"offset":1,"color":"#Hex"}]}
- Image filters: "blur" in 0.0..1.0, brightness/contrast in -1.0..1.0.
- Add 3-5 decorative elements per layout: a stroke-only frame, small rotated shapes behind the product, low-opacity (0.1) background circles, thin dividers between product and call to action.
- Never render tone or style instructions as ad copy. Only headlines, subheads, logos and retailer text appear as text.

## CONTENT RULES
1. Find "MANDATORY TAGLINE TO INCLUDE" in the context data.
2. Every mandate listed there must appear in the layout; do not replace a given tagline with your own slogan.
3. Show the brand name near the top or the bottom.

## TASK
Generate the campaign JSON for the context below."##;

pub const SIMPLIFIED_COORDINATE_PROMPT: &str = r##"You are a coordinate calculation engine. You do not design; you place assets with exact arithmetic.

## ASSETS (use these exact URLs)
ASSET_LEP_LOGO: "https://res.cloudinary.com/video-app-/image/upload/v1764930443/low-everyday-prices-logo_zugj7k.png"
ASSET_DRINKAWARE: "https://res.cloudinary.com/video-app-/image/upload/v1764867609/drinkaware_logo_rgb_znlbh0.png"
ASSET_WHITE_TILE: "https://res.cloudinary.com/video-app-/image/upload/v1764847074/white_tile_file_tqg0ji.png"

## OUTPUT
Raw JSON only, white backgrounds:
{
  "instagram_story": {"width":1080,"height":1920,"backgroundColor":"#ffffff","elements":[...]},
  "instagram_post":  {"width":1080,"height":1080,"backgroundColor":"#ffffff","elements":[...]},
  "facebook_ad":     {"width":1200,"height":628,"backgroundColor":"#ffffff","elements":[...]}
}

## RULES
1. Every element is at least 24px from every canvas edge.
2. Text stacks: element.top = previous.top + previous.height + 24.
3. Story safe zones: content starts at y=274 and ends at y=1646.

## INSTAGRAM POST (1080x1080)
1. User logo: top 24, left 24, width 120 (assume height 80).
2. ASSET_LEP_LOGO: top 24, left 896, width 160.
3. Headline: top 128, left 24, width 800, left aligned, 'Oswald', fontSize 65, fill "#00539F".
4. Subhead: stacked below the headline, left 24, width 800, fontSize 35, fill "#000000".
5. Product: top 540, left 540, origin center, width 600, below the subhead.

## INSTAGRAM STORY (1080x1920)
1. User logo: top 274, left 40, width 180 (assume height 100).
2. Headline: top 398, left 40, width 900, left aligned, fontSize 75, fill "#00539F".
3. Subhead: stacked below the headline, left 40, width 900, fill "#000000".
4. Product: top 950, left 540, origin center, width 850.
5. ASSET_LEP_LOGO: top 1500, left 880, width 160.

## FACEBOOK AD (1200x628)
1. User logo: top 24, left 24, width 100.
2. ASSET_LEP_LOGO: top 24, left 1016, width 160.
3. Headline: top 124, left 24, width 600, fill "#00539F".
4. Subhead: stacked below the headline (20px gap), left 24, width 600.
5. Product: top 314, left 850, origin center, width 500.

## ALCOHOL
Only when an alcohol promotion is mandated, add ASSET_DRINKAWARE (width 150):
story top 1600, left 540, originX center; post top 980, left 880; ad top 550, left 1000.

## CONTENT
Use the logo from "Logo" and product URLs from "ImageURLs" verbatim. The headline and subhead come from the mandates in "MANDATORY TAGLINE TO INCLUDE"; never invent copy and never render tone or style instructions as text."##;
