use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    metadata::{
        create_metadata_accounts_v3, mpl_token_metadata::types::DataV2, CreateMetadataAccountsV3,
        Metadata as Metaplex,
    },
    token::{mint_to, Mint, MintTo, Token, TokenAccount},
};

use crate::{
    error::ErrorCode,
    state::token_data::{MAX_DOB_LEN, MAX_GENDER_LEN, MAX_NAME_LEN},
    TokenData, TokenRegistry,
};

/// Symbol and URI shared by every identity token's metadata record.
/// The URI points at the collection-level document; per-subject data lives
/// in TokenData, not off-chain.
const METADATA_SYMBOL: &str = "SBID";
const METADATA_URI: &str = "https://soulbound.id/token-metadata.json";

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct IdentityParams {
    pub name: String,
    pub dob: String,
    pub gender: String,
}

impl IdentityParams {
    pub fn validate(&self) -> Result<()> {
        require!(
            field_ok(&self.name, MAX_NAME_LEN)
                && field_ok(&self.dob, MAX_DOB_LEN)
                && field_ok(&self.gender, MAX_GENDER_LEN),
            ErrorCode::InvalidIdentityFields
        );
        Ok(())
    }
}

fn field_ok(value: &str, max_len: usize) -> bool {
    !value.trim().is_empty() && value.len() <= max_len
}

#[derive(Accounts)]
pub struct InitiateToken<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(mut)]
    /// CHECK: Created and validated by the token metadata program.
    pub metadata: UncheckedAccount<'info>,
    #[account(
        init_if_needed,
        seeds = [b"mint", payer.key().as_ref()],
        bump,
        payer = payer,
        mint::decimals = 0,
        mint::authority = mint,
    )]
    pub mint: Box<Account<'info, Mint>>,
    #[account(
        init_if_needed,
        seeds = [b"token_data", mint.key().as_ref()],
        bump,
        payer = payer,
        space = 8 + TokenData::INIT_SPACE
    )]
    pub token_data: Box<Account<'info, TokenData>>,
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = payer,
    )]
    pub destination: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        seeds = [b"registry"],
        bump = token_registry.bump
    )]
    pub token_registry: Box<Account<'info, TokenRegistry>>,
    pub rent: Sysvar<'info, Rent>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_metadata_program: Program<'info, Metaplex>,
}

pub fn handler(ctx: Context<InitiateToken>, params: IdentityParams) -> Result<()> {
    params.validate()?;

    require!(
        !ctx.accounts.token_data.is_active,
        ErrorCode::IdentityAlreadyActive
    );

    // A zero bump means the record was created just now (or re-created after
    // a close); a burned-but-not-closed record keeps its registry entry.
    let newly_registered = ctx.accounts.token_data.bump == 0;

    let payer_key = ctx.accounts.payer.key();
    let seeds = &[b"mint".as_ref(), payer_key.as_ref(), &[ctx.bumps.mint]];
    let signer = [&seeds[..]];

    // First mint only. The metadata record is immutable afterwards and
    // survives burn/close cycles together with the mint itself.
    if ctx.accounts.metadata.data_is_empty() {
        let metadata_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_metadata_program.to_account_info(),
            CreateMetadataAccountsV3 {
                payer: ctx.accounts.payer.to_account_info(),
                update_authority: ctx.accounts.mint.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                metadata: ctx.accounts.metadata.to_account_info(),
                mint_authority: ctx.accounts.mint.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                rent: ctx.accounts.rent.to_account_info(),
            },
            &signer,
        );
        let data = DataV2 {
            name: params.name.clone(),
            symbol: METADATA_SYMBOL.to_string(),
            uri: METADATA_URI.to_string(),
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        };
        create_metadata_accounts_v3(metadata_ctx, data, false, true, None)?;
    }

    let token_data = &mut ctx.accounts.token_data;
    token_data.bump = ctx.bumps.token_data;
    token_data.mint = ctx.accounts.mint.key();
    token_data.owner = payer_key;
    token_data.is_active = true;
    token_data.name = params.name;
    token_data.dob = params.dob;
    token_data.gender = params.gender;

    if newly_registered {
        let token_registry = &mut ctx.accounts.token_registry;
        token_registry.active_identities =
            token_registry.active_identities.checked_add(1).unwrap();
    }

    mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                authority: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
            },
            &signer,
        ),
        1,
    )?;

    msg!("Identity minted for {}", ctx.accounts.mint.key());

    Ok(())
}
