use pokerhands::{Card, HandInfo, HandKind, Validator, ValidatorOptions, Verdict, parse_tokens};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmValidator {
    validator: Validator,
}

#[wasm_bindgen]
impl WasmValidator {
    #[wasm_bindgen(constructor)]
    pub fn new(strict: bool) -> Self {
        let options = ValidatorOptions::default().with_strict_card_count(strict);
        Self {
            validator: Validator::new(options),
        }
    }

    pub fn validate(&self, id: &str, tokens: Vec<String>) -> Result<bool, JsValue> {
        self.validator.validate(id, &tokens).map_err(js_err)
    }

    pub fn check(&self, id: &str, tokens: Vec<String>) -> Result<JsValue, JsValue> {
        let kind = parse_kind(id)?;
        let cards = parse_tokens(&tokens).map_err(js_err)?;
        let verdict = JsVerdict::from(self.validator.check(kind, &cards));
        to_js_value(&verdict)
    }

    pub fn classify(&self, tokens: Vec<String>) -> Result<Option<String>, JsValue> {
        let cards = parse_tokens(&tokens).map_err(js_err)?;
        Ok(self
            .validator
            .classify(&cards)
            .map(|kind| kind.id().to_string()))
    }

    pub fn max_cards(&self) -> u32 {
        self.validator.options().max_cards as u32
    }
}

#[wasm_bindgen]
pub fn categories() -> Result<JsValue, JsValue> {
    let categories: Vec<JsHandInfo> = pokerhands::categories()
        .iter()
        .map(JsHandInfo::from)
        .collect();
    to_js_value(&categories)
}

#[wasm_bindgen]
pub fn lookup(id: &str) -> Result<JsValue, JsValue> {
    let info = pokerhands::lookup(id).map_err(js_err)?;
    to_js_value(&JsHandInfo::from(info))
}

#[wasm_bindgen]
pub fn validate(id: &str, tokens: Vec<String>) -> Result<bool, JsValue> {
    pokerhands::validate(id, &tokens).map_err(js_err)
}

#[wasm_bindgen]
pub fn deck() -> Vec<String> {
    pokerhands::Deck::new()
        .into_iter()
        .map(|card: Card| card.to_string())
        .collect()
}

#[derive(Serialize)]
struct JsHandInfo {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    strength: u8,
    min_cards: u32,
    example: &'static str,
}

impl From<&HandInfo> for JsHandInfo {
    fn from(info: &HandInfo) -> Self {
        Self {
            id: info.id,
            name: info.name,
            description: info.description,
            strength: info.strength,
            min_cards: info.min_cards as u32,
            example: info.example,
        }
    }
}

#[derive(Serialize)]
struct JsVerdict {
    status: &'static str,
    hand: &'static str,
    required: u32,
    selected: Option<u32>,
    message: String,
}

impl From<Verdict> for JsVerdict {
    fn from(verdict: Verdict) -> Self {
        let kind = verdict.kind();
        let (status, selected) = match verdict {
            Verdict::NeedsCards { selected, .. } => ("NeedsCards", Some(selected as u32)),
            Verdict::Valid(_) => ("Valid", None),
            Verdict::Invalid(_) => ("Invalid", None),
        };

        Self {
            status,
            hand: kind.id(),
            required: kind.min_cards() as u32,
            selected,
            message: verdict.to_string(),
        }
    }
}

fn parse_kind(id: &str) -> Result<HandKind, JsValue> {
    id.parse::<HandKind>().map_err(js_err)
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
