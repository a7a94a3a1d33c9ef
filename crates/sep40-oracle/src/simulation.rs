//! Read-only execution of a single contract call through transaction simulation.
//!
//! The simulation endpoint only accepts a syntactically complete transaction,
//! so each call is wrapped in a throwaway envelope: a placeholder source
//! account, zero fee, no time bound, no signatures. The envelope is never
//! submitted.

use core::future::Future;
use core::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};
use soroban_sdk::xdr::{
    Hash, Limits, Memo, MuxedAccount, Operation, Preconditions, ReadXdr, ScVal, SequenceNumber,
    TimeBounds, TimePoint, Transaction, TransactionEnvelope, TransactionExt,
    TransactionSignaturePayload, TransactionSignaturePayloadTaggedTransaction,
    TransactionV1Envelope, VecM, WriteXdr,
};

use crate::Error;
use crate::rpc::SimulateTransactionResponse;

/// Network the simulated envelopes are built for.
pub const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";

/// Zero-balance account used as the source of simulated transactions.
pub const DEFAULT_SIM_ACCOUNT: &str = "GALAXYVOIDAOPZTDLHILAJQKCVVFMD4IKLXLSZV5YHO7VY74IWZILUTO";

/// RPC collaborator able to run a transaction through simulation only.
pub trait SimulateTransaction {
    fn simulate_transaction(
        &self,
        envelope: &TransactionEnvelope,
    ) -> impl Future<Output = Result<SimulateTransactionResponse, Error>> + Send;
}

/// Result of one simulation, before it is turned into a return value or an error.
#[derive(Clone, Debug, PartialEq)]
pub enum SimulationOutcome {
    Success(ScVal),
    Failed(String),
}

impl SimulationOutcome {
    pub fn from_response(response: &SimulateTransactionResponse) -> Result<Self, Error> {
        if let Some(error) = &response.error {
            return Ok(SimulationOutcome::Failed(error.clone()));
        }
        let result = response
            .results
            .as_deref()
            .and_then(|results| results.first())
            .ok_or(Error::MissingReturnValue)?;
        let bytes = STANDARD.decode(&result.xdr)?;
        Ok(SimulationOutcome::Success(ScVal::from_xdr(
            bytes,
            Limits::none(),
        )?))
    }
}

/// Placeholder source identity. Its sequence number stays at zero.
#[derive(Clone, Debug)]
pub struct SimAccount {
    address: String,
    account: MuxedAccount,
    sequence: i64,
}

impl SimAccount {
    pub fn new(address: &str) -> Result<Self, Error> {
        let account =
            MuxedAccount::from_str(address).map_err(|_| Error::InvalidAddress(address.to_owned()))?;
        Ok(Self {
            address: address.to_owned(),
            account,
            sequence: 0,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn sequence(&self) -> i64 {
        self.sequence
    }

    /// Fee-free, unbounded, unsigned transaction carrying `operation`.
    pub fn transaction(&self, operation: Operation) -> Result<Transaction, Error> {
        Ok(Transaction {
            source_account: self.account.clone(),
            fee: 0,
            seq_num: SequenceNumber(self.sequence + 1),
            cond: Preconditions::Time(TimeBounds {
                min_time: TimePoint(0),
                max_time: TimePoint(0),
            }),
            memo: Memo::None,
            operations: VecM::try_from(vec![operation])?,
            ext: TransactionExt::V0,
        })
    }
}

/// Hash of `tx` for the test network, as a signer would compute it.
pub fn transaction_hash(tx: &Transaction) -> Result<[u8; 32], Error> {
    let payload = TransactionSignaturePayload {
        network_id: Hash(Sha256::digest(TESTNET_PASSPHRASE.as_bytes()).into()),
        tagged_transaction: TransactionSignaturePayloadTaggedTransaction::Tx(tx.clone()),
    };
    Ok(Sha256::digest(payload.to_xdr(Limits::none())?).into())
}

/// Simulates `operation` (a call to `method`) from `account` and returns the
/// contract's return value.
pub(crate) async fn simulate<R: SimulateTransaction>(
    rpc: &R,
    account: &SimAccount,
    method: &str,
    operation: Operation,
) -> Result<ScVal, Error> {
    let tx = account.transaction(operation)?;
    let hash = hex::encode(transaction_hash(&tx)?);
    let envelope = TransactionEnvelope::Tx(TransactionV1Envelope {
        tx,
        signatures: VecM::default(),
    });

    let response = rpc.simulate_transaction(&envelope).await?;
    tracing::debug!(
        method,
        tx_hash = %hash,
        latest_ledger = response.latest_ledger,
        failed = response.error.is_some(),
        "simulated oracle call"
    );

    match SimulationOutcome::from_response(&response)? {
        SimulationOutcome::Success(retval) => Ok(retval),
        SimulationOutcome::Failed(message) => Err(Error::SimulationFailed(message)),
    }
}
