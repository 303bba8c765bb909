/*
[INPUT]:  Wallet private key and public key from the environment
[OUTPUT]: KYC status and linked bank accounts printed to stdout
[POS]:    Examples - signed IHL request demonstration
[UPDATE]: When the signed request flow changes
*/

use ihl_adapter::*;

/// Example: wallet-signed IHL requests
///
/// 1. Create HTTP client for the test network
/// 2. Load a local wallet from IHL_WALLET_PRIVATE_KEY
/// 3. Ensure a Persona account exists (409 counts as success)
/// 4. List linked bank accounts
#[tokio::main]
async fn main() {
    println!("=== IHL Bank Accounts Example ===\n");

    // Step 1: Create HTTP client
    let client = match IhlClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}", client.base_url());

    // Step 2: Load wallet
    let private_key = match std::env::var("IHL_WALLET_PRIVATE_KEY") {
        Ok(key) => key,
        Err(_) => {
            println!("Set IHL_WALLET_PRIVATE_KEY and IHL_WALLET_PUBLIC_KEY to run this example");
            return;
        }
    };
    let public_key = std::env::var("IHL_WALLET_PUBLIC_KEY").unwrap_or_default();
    let wallet = match EvmWalletSigner::new(&private_key) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to load wallet: {}", e);
            return;
        }
    };
    let address = wallet.address().to_string();
    println!("✓ Wallet loaded: {}", address);

    let auth = WalletAuth::new(&address, &public_key, &wallet);

    // Step 3: Persona account
    match client.create_persona_account(&auth).await {
        Ok(()) => println!("✓ Persona account ready"),
        Err(e) => eprintln!("✗ Persona account: {}", e),
    }

    // Step 4: Bank accounts
    match client.bank_accounts(&auth).await {
        Ok(accounts) => {
            println!("✓ {} linked bank account(s)", accounts.len());
            for account in accounts {
                println!(
                    "  #{} {} ({}) ****{}",
                    account.id,
                    account.account_name,
                    account.account_type,
                    account.account_number_truncated
                );
            }
        }
        Err(e) => eprintln!("✗ Bank accounts: {}", e),
    }
}
