//! Prompt templates for the sustainability analysis.
//!
//! Both prompts ask for the same five labeled sections the section
//! extractor looks for; keep the headers in sync with
//! `ecocart_core::analysis`.

/// Fixed probe sent by the connection test.
pub const TEST_PROMPT: &str = "Hello, this is a test message. Please respond with \
'AI service is working correctly with Gemini 1.5 Flash model.'";

/// Prompt for image-backed analysis.
pub fn vision_prompt(product_name: &str) -> String {
    format!(
        "Analyze this eco-friendly product \"{product_name}\" and provide a detailed \
analysis with clear sections:

Components & Materials:
Provide detailed information about the materials used in this product. Include \
primary materials, secondary components, manufacturing materials, and any visible \
certifications or labels.

Eco-Friendly Features:
List and explain the sustainable aspects of this product including renewable \
materials, biodegradable components, recyclable parts, energy efficiency features, \
and sustainable manufacturing indicators.

Recycling Instructions:
Provide step-by-step instructions for recycling and disposal:
1. How to disassemble the product if needed
2. Which parts go in which recycling bins
3. Special disposal requirements for any components
4. Local recycling center recommendations
5. Reuse possibilities before disposal

Environmental Impact:
Explain the environmental benefits including carbon footprint reduction, resource \
conservation, waste reduction impact, and long-term environmental benefits compared \
to conventional alternatives.

Sustainability Score:
Rate this product from 1-5 stars based on overall eco-friendliness. Explain your \
rating considering materials, manufacturing, and end-of-life disposal.

Please provide detailed, specific information for each section."
    )
}

/// Prompt used when only the product name is available.
pub fn text_only_prompt(product_name: &str) -> String {
    format!(
        "Analyze the eco-friendly product \"{product_name}\" and provide a detailed \
sustainability analysis with clear sections:

Components & Materials:
Based on the product name, list the likely materials and components:
- Primary materials typically used for this product type
- Common secondary components and hardware
- Manufacturing materials and processes
- Typical certifications for this product category

Eco-Friendly Features:
Identify potential sustainable aspects of this product type:
- Renewable materials commonly used
- Biodegradable components typical for this product
- Recyclable parts and materials
- Energy efficiency features (if applicable)
- Sustainable manufacturing practices

Recycling Instructions:
Provide specific recycling and disposal instructions for this product type:
1. Step-by-step disassembly process (if needed)
2. Which components go in which recycling streams
3. Special disposal requirements for any materials
4. Local recycling options and recommendations
5. Reuse and upcycling possibilities

Environmental Impact:
Assess the environmental benefits of this product type:
- Carbon footprint reduction compared to conventional alternatives
- Resource conservation benefits
- Waste reduction impact
- Long-term environmental advantages

Sustainability Score:
Rate this product type from 1-5 stars based on typical eco-friendliness, \
considering common materials, manufacturing processes, and end-of-life disposal \
options. Explain your rating.

Please be specific and detailed in each section based on common characteristics \
of this product type."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION_HEADERS: [&str; 5] = [
        "Components & Materials:",
        "Eco-Friendly Features:",
        "Recycling Instructions:",
        "Environmental Impact:",
        "Sustainability Score:",
    ];

    #[test]
    fn test_vision_prompt_names_product_and_sections() {
        let prompt = vision_prompt("Bamboo Toothbrush Set");

        assert!(prompt.contains("\"Bamboo Toothbrush Set\""));
        for header in SECTION_HEADERS {
            assert!(prompt.contains(header), "missing header: {header}");
        }
    }

    #[test]
    fn test_text_only_prompt_names_product_and_sections() {
        let prompt = text_only_prompt("Solar Power Bank");

        assert!(prompt.contains("\"Solar Power Bank\""));
        for header in SECTION_HEADERS {
            assert!(prompt.contains(header), "missing header: {header}");
        }
    }
}
