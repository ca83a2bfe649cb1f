use soroban_sdk::contracttype;

/// Conversion rates of a convertible against the exchange token.
///
/// One exchange token buys `purchase_price` convertibles; redeeming gives one
/// exchange token back per `intrinsic_value` convertibles.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ExchangeRate {
    pub purchase_price: i128,
    pub intrinsic_value: i128,
}

impl ExchangeRate {
    pub fn is_valid(&self) -> bool {
        self.purchase_price > 0
            && self.intrinsic_value > 0
            && self.purchase_price <= self.intrinsic_value
    }
}
