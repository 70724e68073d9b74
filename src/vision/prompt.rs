/// User-supplied context passed along with the image.
#[derive(Debug, Clone)]
pub struct ScanHints {
    pub product_name: String,
    pub net_weight: String,
    pub country: String,
}

/// Builds the analysis instruction sent to the vision model. The model is
/// asked to answer with raw JSON only; anything else is rejected downstream.
pub fn build_prompt(hints: &ScanHints) -> String {
    format!(
        r#"Analyze this product image from {country} considering its food standards.

Product details:
- Name: {product_name}
- Net weight: {net_weight}

Extract all readable text and generate a structured health analysis JSON:
{{
  "productName": "Name of the product",
  "netWeight": "Net weight of the product",
  "country": "Country entered by user",
  "extractedText": "All text on packaging",
  "healthScore": Number (0-100, higher is healthier),
  "healthRisks": ["Risk 1", "Risk 2"],
  "consumptionFrequency": "Daily/Weekly/Occasionally/Rarely/Avoid",
  "alternatives": ["Better alternative 1", "Better alternative 2"],
  "ageSuitability": "Recommended age group",
  "warningLabels": ["Warning 1", "Warning 2"]
}}

Return ONLY raw JSON, no markdown or explanations."#,
        country = hints.country,
        product_name = hints.product_name,
        net_weight = hints.net_weight,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_includes_hints_and_json_contract() {
        let hints = ScanHints {
            product_name: "Apple Juice".into(),
            net_weight: "500 ml".into(),
            country: "India".into(),
        };
        let prompt = build_prompt(&hints);
        assert!(prompt.contains("Apple Juice"));
        assert!(prompt.contains("500 ml"));
        assert!(prompt.contains("product image from India"));
        assert!(prompt.contains("healthScore"));
        assert!(prompt.contains("Daily/Weekly/Occasionally/Rarely/Avoid"));
        assert!(prompt.contains("Return ONLY raw JSON"));
    }
}
