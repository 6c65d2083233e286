use serde::Deserialize;

const NOT_SPECIFIED: &str = "Not specified";

/// Free-text fields for the recommendation prompt. Missing fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecommendationArgs {
    pub customer_needs: String,
    pub category: String,
    pub size: String,
    pub color: String,
}

/// Fill the fixed five-step shopping-assistant template.
///
/// Values are inserted verbatim; an empty category, size or color reads as
/// "Not specified". `check_product_inventory` is only named here, this
/// server does not provide it.
pub fn build_prompt(args: &RecommendationArgs) -> String {
    let needs = &args.customer_needs;
    let category = or_not_specified(&args.category);
    let size = or_not_specified(&args.size);
    let color = or_not_specified(&args.color);
    let category_key = args.category.to_lowercase();

    format!(
        "You are helping a customer find shoes. Here's what they've told you:

Customer needs: {needs}
Category preference: {category}
Size preference: {size}
Color preference: {color}

Your task:
1. If category is specified, use the catalog://{category_key} resource to see available products
2. Use the search_products tool to find matching shoes based on their preferences
3. For any specific products you want to recommend, use check_product_inventory to verify availability
4. Present the options in a friendly, conversational way
5. If they haven't specified size or color, ask for those details

Be helpful and guide them toward making a decision!"
    )
}

fn or_not_specified(value: &str) -> &str {
    if value.is_empty() {
        NOT_SPECIFIED
    } else {
        value
    }
}
