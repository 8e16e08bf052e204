//! In-memory connector.
//!
//! Stands in for a chain during tests: constructor arguments are bound
//! back to their accessor names through the declared bindings, addresses
//! are allocated from a counter, and reads come straight out of a map.
//! Constructor arity is enforced the way a real backend would.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::abi::ContractArtifact;
use crate::deploy::{ConnectorError, ContractConnector, DeployedContract};
use crate::terms::{binding, TermValue};

/// Connector that keeps every deployed instance in memory.
#[derive(Debug, Default)]
pub struct MemoryConnector {
    next_address: AtomicU64,
}

impl MemoryConnector {
    /// Fresh connector with an empty address space.
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_address(&self) -> Address {
        let nonce = self.next_address.fetch_add(1, Ordering::Relaxed) + 1;
        let mut bytes = [0u8; 20];
        bytes[12..].copy_from_slice(&nonce.to_be_bytes());
        Address::from(bytes)
    }
}

#[async_trait]
impl ContractConnector for MemoryConnector {
    async fn construct(
        &self,
        artifact: &ContractArtifact,
        args: &[TermValue],
    ) -> Result<Box<dyn DeployedContract>, ConnectorError> {
        let contract = &artifact.contract_name;
        let Some(constructor) = artifact.constructor() else {
            return Err(ConnectorError::Rejected {
                contract: contract.clone(),
                reason: "artifact has no constructor".to_string(),
            });
        };
        if constructor.inputs.len() != args.len() {
            return Err(ConnectorError::Rejected {
                contract: contract.clone(),
                reason: format!(
                    "expected {} arguments, got {}",
                    constructor.inputs.len(),
                    args.len()
                ),
            });
        }

        let mut state = HashMap::new();
        for (input, value) in constructor.inputs.iter().zip(args) {
            let Some(accessor) = binding::dictionary_key(&input.name) else {
                return Err(ConnectorError::Rejected {
                    contract: contract.clone(),
                    reason: format!("no accessor binding for parameter {}", input.name),
                });
            };
            state.insert(accessor.to_string(), value.clone());
        }

        Ok(Box::new(MemoryInstance {
            address: self.allocate_address(),
            state,
        }))
    }
}

/// A single constructed instance held in memory.
#[derive(Debug)]
struct MemoryInstance {
    address: Address,
    state: HashMap<String, TermValue>,
}

#[async_trait]
impl DeployedContract for MemoryInstance {
    fn address(&self) -> Address {
        self.address
    }

    async fn read(&self, accessor: &str) -> Result<TermValue, ConnectorError> {
        self.state
            .get(accessor)
            .cloned()
            .ok_or_else(|| ConnectorError::UnknownAccessor(accessor.to_string()))
    }
}
