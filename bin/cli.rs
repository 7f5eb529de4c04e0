//! CLI tool for deploying and interacting with the budget distributor contracts.

use budget_distributor_contracts::token::PausableToken;
use budget_distributor_contracts::treasury::native_distributor::BudgetCsprDistributor;
use budget_distributor_contracts::treasury::token_distributor::BudgetTokenDistributor;
use odra::casper_types::U512;
use odra::host::{HostEnv, NoArgs};
use odra::prelude::{Address, Addressable};
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};

/// Deploys the native CSPR budget distributor.
pub struct CsprDistributorDeployScript;

impl DeployScript for CsprDistributorDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        let _treasury = BudgetCsprDistributor::load_or_deploy(
            &env,
            NoArgs,
            container,
            300_000_000_000 // Gas limit for distributor deployment
        )?;

        Ok(())
    }
}

/// Deploys the pausable funding token and the token-settled distributor.
/// The token receives the full initial supply on the deployer account.
pub struct TokenDistributorDeployScript;

impl DeployScript for TokenDistributorDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use budget_distributor_contracts::token::PausableTokenInitArgs;
        use budget_distributor_contracts::treasury::token_distributor::BudgetTokenDistributorInitArgs;
        use odra::casper_types::U256;

        let token = PausableToken::load_or_deploy(
            &env,
            PausableTokenInitArgs {
                total_supply: U256::from(1_000_000u64) * U256::from(10u128.pow(18)),
            },
            container,
            300_000_000_000
        )?;

        let _treasury = BudgetTokenDistributor::load_or_deploy(
            &env,
            BudgetTokenDistributorInitArgs {
                token_address: token.address().clone(),
            },
            container,
            300_000_000_000 // Gas limit for distributor deployment
        )?;

        Ok(())
    }
}

/// Scenario to earmark rewards for a contributor.
pub struct AssignRewardsScenario;

impl Scenario for AssignRewardsScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new(
                "contributor",
                "Address of the contributor",
                NamedCLType::Key,
            ),
            CommandArg::new(
                "amount",
                "Amount of motes to earmark",
                NamedCLType::U512,
            ),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut treasury = container.contract_ref::<BudgetCsprDistributor>(env)?;
        let contributor = args.get_single::<Address>("contributor")?;
        let amount = args.get_single::<U512>("amount")?;

        env.set_gas(10_000_000_000);
        treasury.try_assign(contributor, amount)?;

        println!("Rewards assigned successfully!");
        Ok(())
    }
}

impl ScenarioMetadata for AssignRewardsScenario {
    const NAME: &'static str = "assign-rewards";
    const DESCRIPTION: &'static str = "Earmarks part of the available budget for a contributor";
}

/// Scenario to pay out earmarked rewards to a contributor.
pub struct ReleaseRewardsScenario;

impl Scenario for ReleaseRewardsScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new(
                "contributor",
                "Address of the contributor",
                NamedCLType::Key,
            ),
            CommandArg::new(
                "amount",
                "Amount of motes to release",
                NamedCLType::U512,
            ),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut treasury = container.contract_ref::<BudgetCsprDistributor>(env)?;
        let contributor = args.get_single::<Address>("contributor")?;
        let amount = args.get_single::<U512>("amount")?;

        env.set_gas(10_000_000_000);
        treasury.try_release(contributor, amount)?;

        println!("Rewards released successfully!");
        Ok(())
    }
}

impl ScenarioMetadata for ReleaseRewardsScenario {
    const NAME: &'static str = "release-rewards";
    const DESCRIPTION: &'static str = "Pays out earmarked rewards to a contributor";
}

/// Main function to run the CLI tool.
pub fn main() {
    OdraCli::new()
        .about("CLI tool for the budget distributor contracts")
        // Deploy scripts
        .deploy(CsprDistributorDeployScript)
        .deploy(TokenDistributorDeployScript)
        // Contract references
        .contract::<BudgetCsprDistributor>()
        .contract::<BudgetTokenDistributor>()
        .contract::<PausableToken>()
        // Scenarios
        .scenario(AssignRewardsScenario)
        .scenario(ReleaseRewardsScenario)
        .build()
        .run();
}
