use yew::{AttrValue, Html, Properties, function_component, html};

const DEFAULT_CURRENCY: &str = "USD";

/// Format an amount for display: `$12.50` for US dollars, `12.50 EUR` for
/// any other currency code.
pub fn format_price(amount: f64, currency: Option<&str>) -> String {
    let code = currency
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .unwrap_or(DEFAULT_CURRENCY)
        .to_ascii_uppercase();
    if code == DEFAULT_CURRENCY {
        if amount < 0.0 {
            format!("-${:.2}", amount.abs())
        } else {
            format!("${amount:.2}")
        }
    } else {
        format!("{amount:.2} {code}")
    }
}

#[derive(Properties, PartialEq)]
pub struct PriceProps {
    pub amount: f64,
    #[prop_or_default]
    pub currency: Option<AttrValue>,
}

#[function_component(Price)]
pub fn price(props: &PriceProps) -> Html {
    html! {
        <span class="font-semibold text-primary">
            { format_price(props.amount, props.currency.as_deref()) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollars_use_the_symbol() {
        assert_eq!(format_price(12.5, Some("USD")), "$12.50");
        assert_eq!(format_price(0.0, None), "$0.00");
        assert_eq!(format_price(1999.999, Some("usd")), "$2000.00");
        assert_eq!(format_price(-3.0, None), "-$3.00");
    }

    #[test]
    fn test_other_currencies_use_the_code() {
        assert_eq!(format_price(12.5, Some("EUR")), "12.50 EUR");
        assert_eq!(format_price(7.0, Some("gbp")), "7.00 GBP");
    }

    #[test]
    fn test_blank_currency_means_dollars() {
        assert_eq!(format_price(4.2, Some("  ")), "$4.20");
    }
}
