use crate::address::{AddressType, CashAddress};
use crate::networks::Network;
use wasm_bindgen::{JsError, JsValue};

pub(crate) trait TryIntoJsValue {
    fn try_to_js_value(&self) -> Result<JsValue, JsError>;
}

macro_rules! js_obj {
    ( $( $key:expr => $value:expr ),* ) => {{
        let obj = js_sys::Object::new();
        $(
            js_sys::Reflect::set(&obj, &$key.into(), &$value.try_to_js_value()?.into())
                .map_err(|_| JsError::new("Failed to set object property"))?;
        )*
        Ok(Into::<JsValue>::into(obj)) as Result<JsValue, JsError>
    }};
}

impl TryIntoJsValue for String {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        Ok(JsValue::from_str(self))
    }
}

impl<T: TryIntoJsValue> TryIntoJsValue for Option<T> {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        match self {
            Some(v) => v.try_to_js_value(),
            None => Ok(JsValue::NULL),
        }
    }
}

// hashes go to JS as Uint8Array
impl TryIntoJsValue for Vec<u8> {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        Ok(js_sys::Uint8Array::from(self.as_slice()).into())
    }
}

impl TryIntoJsValue for AddressType {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        Ok(JsValue::from_f64(self.to_u8() as f64))
    }
}

impl TryIntoJsValue for Network {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        Ok(JsValue::from_str(self.as_str()))
    }
}

impl TryIntoJsValue for CashAddress {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        js_obj!(
            "prefix" => self.prefix.clone(),
            "network" => Network::from_cashaddr_prefix(&self.prefix),
            "type" => self.address_type,
            "typeName" => self.address_type.to_string(),
            "hash" => self.hash.clone()
        )
    }
}
