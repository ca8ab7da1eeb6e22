mod address;

pub use address::CashAddrNamespace;
