//! Instruction and prompt text sent with every blog generation.

use super::InputParameters;

pub const OPENING_HEADING: &str = "Market Overview";
pub const IMAGE_WIDTH: u32 = 800;
pub const IMAGE_HEIGHT: u32 = 600;
pub const TARGET_WORDS: u32 = 1500;

pub const SECTIONS: [&str; 6] = [
    "Market Dynamics",
    "Key Growth Drivers",
    "Market Challenges",
    "Segmentation Analysis",
    "Regional Insights",
    "Future Outlook",
];

pub fn image_tag(inputs: &InputParameters) -> String {
    format!(
        r#"<img src="{}" width="{}" height="{}" alt="{} market analysis" />"#,
        inputs.image_link, IMAGE_WIDTH, IMAGE_HEIGHT, inputs.keyword
    )
}

pub fn read_more_line(inputs: &InputParameters) -> String {
    format!(
        r#"Read more: <a href="{0}">{0}</a>"#,
        inputs.source_link
    )
}

pub fn system_instruction(inputs: &InputParameters) -> String {
    let InputParameters {
        keyword,
        source_link,
        ..
    } = inputs;

    format!(
        "You are a professional SEO market research blog generator.
Your task is to generate a comprehensive, SEO-friendly market research blog post of approximately {TARGET_WORDS} words.

CORE RULES:
1. Output VALID HTML ONLY. Do not include markdown code blocks, backticks, or \"html\" labels. Just raw HTML starting with <h2>.
2. Start directly with an <h2> section titled exactly: {OPENING_HEADING}.
3. No preamble, no title, no introduction before that <h2>.
4. Opening Paragraph: Use the Google Search tool to visit the Source Link: {source_link}.
   Copy the FIRST paragraph from that page exactly.
   Hyperlink ONLY the Keyword \"{keyword}\" within this paragraph using the Link: {source_link}.
5. Image: Immediately after the opening paragraph, insert: {image}.
6. Content Organization: Use <h2> and <h3> tags.
   Must include: {sections}.
7. Professional, authoritative tone. No competitor names.
8. NO external or internal links other than the provided Source Link.
9. Mandatory Line: After the end of the THIRD <h2> section, insert this line exactly:
   {read_more}
10. Hyperlink the Keyword \"{keyword}\" exactly ONCE in the entire blog (in the first paragraph).
11. Aim for a high word count (~{TARGET_WORDS} words) with deep analysis.",
        image = image_tag(inputs),
        sections = section_list(),
        read_more = read_more_line(inputs),
    )
}

pub fn user_prompt(inputs: &InputParameters) -> String {
    format!(
        "Generate a market research blog post based on these inputs:
Keyword: {keyword}
Source Link: {source}
Image Link: {image}

Remember: Use the Search tool to fetch the first paragraph from {source} and follow all structural rules.",
        keyword = inputs.keyword,
        source = inputs.source_link,
        image = inputs.image_link,
    )
}

fn section_list() -> String {
    let last = SECTIONS.len() - 1;
    format!("{}, and {}", SECTIONS[..last].join(", "), SECTIONS[last])
}
