use anchor_lang::prelude::*;
use anchor_spl::token::{mint_to, Mint, MintTo, Token};

use crate::{
    constants::MAX_BATCH_MINT,
    error::ErrorCode,
    events::{BatchMinted, MintSkipped, TokensIssued},
    helpers::assert_issuer_authorized,
    state::IssuerSet,
};

/// Mints to a list of recipient token accounts passed as remaining accounts,
/// one per entry in `amounts`. Zero-amount entries are skipped with a notice
/// instead of failing the batch: proportional-reward rounding legitimately
/// floors low-weight shares to zero, and one empty share must not deny the
/// rest of the contributors.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, BatchMint<'info>>,
    amounts: Vec<u64>,
) -> Result<()> {
    assert_issuer_authorized(&ctx.accounts.issuer, &ctx.accounts.issuer_set)?;

    let recipients = ctx.remaining_accounts;
    require!(!amounts.is_empty(), ErrorCode::EmptyBatch);
    require!(amounts.len() <= MAX_BATCH_MINT, ErrorCode::BatchTooLarge);
    require!(
        recipients.len() == amounts.len(),
        ErrorCode::LengthMismatch
    );
    for recipient in recipients {
        require!(
            recipient.key() != Pubkey::default(),
            ErrorCode::NullAddress
        );
    }

    let mint_key = ctx.accounts.mint.key();
    let authority_bump = ctx.accounts.issuer_set.authority_bump;
    let signer_seeds: &[&[u8]] = &[b"mint-authority", mint_key.as_ref(), &[authority_bump]];

    let mut total_amount: u64 = 0;
    let mut minted_count: u32 = 0;
    let mut skipped_count: u32 = 0;

    for (index, (recipient, amount)) in recipients.iter().zip(amounts.iter()).enumerate() {
        if *amount == 0 {
            skipped_count += 1;
            emit!(MintSkipped {
                token_mint: mint_key,
                recipient: recipient.key(),
                index: index as u32,
            });
            continue;
        }

        mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.mint.to_account_info(),
                    to: recipient.to_account_info(),
                    authority: ctx.accounts.mint_authority.to_account_info(),
                },
                &[signer_seeds],
            ),
            *amount,
        )?;

        total_amount = total_amount
            .checked_add(*amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        minted_count += 1;

        emit!(TokensIssued {
            token_mint: mint_key,
            recipient: recipient.key(),
            amount: *amount,
        });
    }

    emit!(BatchMinted {
        token_mint: mint_key,
        total_amount,
        minted_count,
        skipped_count,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct BatchMint<'info> {
    pub issuer: Signer<'info>,
    #[account(
        seeds = [b"issuer-set", mint.key().as_ref()],
        bump = issuer_set.bump,
    )]
    pub issuer_set: Account<'info, IssuerSet>,
    #[account(mut, address = issuer_set.token_mint)]
    pub mint: Account<'info, Mint>,
    /// CHECK: PDA signer holding the SPL mint authority.
    #[account(
        seeds = [b"mint-authority", mint.key().as_ref()],
        bump = issuer_set.authority_bump,
    )]
    pub mint_authority: UncheckedAccount<'info>,
    pub token_program: Program<'info, Token>,
}
