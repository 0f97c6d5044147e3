use std::net::Ipv4Addr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupOutcome {
    pub address: Option<Ipv4Addr>,
}

impl LookupOutcome {
    pub fn body(&self) -> String {
        match self.address {
            Some(address) => format!("IPv4: {address}\n"),
            None => "IPv4 not found.\n".to_string(),
        }
    }
}
