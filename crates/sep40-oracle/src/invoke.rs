use soroban_sdk::xdr::{
    HostFunction, InvokeContractArgs, InvokeHostFunctionOp, Operation, OperationBody, ScAddress,
    ScSymbol, ScVal, StringM, VecM,
};

use crate::Error;

// SEP-40 consumer interface method names
pub const BASE: &str = "base";
pub const ASSETS: &str = "assets";
pub const DECIMALS: &str = "decimals";
pub const RESOLUTION: &str = "resolution";
pub const PRICES: &str = "prices";
pub const LAST_PRICE: &str = "lastprice";
pub const PRICE: &str = "price";

/// Builds a single `InvokeHostFunction` operation calling `method` on
/// `contract` with positional `args`.
///
/// Arity and argument types are not checked here; a malformed call is
/// rejected by the simulation.
pub fn contract_call(
    contract: &ScAddress,
    method: &str,
    args: Vec<ScVal>,
) -> Result<Operation, Error> {
    let invoke = InvokeContractArgs {
        contract_address: contract.clone(),
        function_name: ScSymbol(StringM::try_from(method)?),
        args: VecM::try_from(args)?,
    };

    Ok(Operation {
        source_account: None,
        body: OperationBody::InvokeHostFunction(InvokeHostFunctionOp {
            host_function: HostFunction::InvokeContract(invoke),
            auth: VecM::default(),
        }),
    })
}
