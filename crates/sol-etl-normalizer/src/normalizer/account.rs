// crates/sol-etl-normalizer/src/normalizer/account.rs

//! Account record assembly

use {
    super::{BlockContext, EntityRef},
    crate::{
        convert::{parse_token_amount, widen},
        policy::{non_empty, non_empty_optional, placeholder},
    },
    sol_etl_common::{
        AccountRecord, AuthorizedVoterRecord, DataRecord, EpochCreditRecord, PriorVoterRecord,
        RawAccount, RawAuthorizedVoter, RawData, RawEpochCredit, RawPriorVoter, RawVote,
        RecordError, TimestampRecord, VoteRecord,
    },
};

pub(super) fn account_record(
    context: &BlockContext,
    tx_signature: Option<&String>,
    account: &RawAccount,
    entity: &EntityRef<'_>,
) -> Result<AccountRecord, RecordError> {
    let retrieval_timestamp = entity.micros(
        "retrieval_timestamp",
        account.retrieval_timestamp.map(|ts| ts.timestamp),
    )?;

    let token_amount = parse_token_amount(account.token_amount.as_deref()).map_err(|kind| {
        entity.error(
            "token_amount",
            account.token_amount.clone().unwrap_or_default(),
            kind,
        )
    })?;

    let last_timestamp = match account.last_timestamp {
        Some(ts) => Some(TimestampRecord {
            timestamp: entity.micros("last_timestamp.timestamp", Some(ts.timestamp))?,
            slot: Some(ts.slot),
        }),
        None => None,
    };

    // Epoch credits are only taken from accounts that also report votes.
    let epoch_credits = if account.votes.is_some() {
        non_empty(&account.epoch_credits, epoch_credit_record)
    } else {
        vec![placeholder()]
    };

    Ok(AccountRecord {
        block_slot: Some(context.slot),
        block_timestamp: context.timestamp,
        block_hash: Some(context.hash.clone()),
        tx_signature: tx_signature.cloned(),
        retrieval_timestamp,

        pubkey: Some(account.pubkey.clone()),
        executable: Some(account.executable),
        lamports: Some(account.lamports),
        owner: account.owner.clone(),
        rent_epoch: account.rent_epoch.map(widen),
        program: account.program.clone(),
        space: account.space,
        account_type: account.account_type.clone(),
        is_native: account.is_native,
        mint: account.mint.clone(),
        state: account.state.clone(),
        token_amount,
        token_amount_decimals: account.token_amount_decimals,
        program_data: account.program_data.clone(),

        authorized_voters: non_empty(&account.authorized_voters, authorized_voter_record),
        authorized_withdrawer: account.authorized_withdrawer.clone(),
        prior_voters: non_empty(&account.prior_voters, prior_voter_record),
        node_pubkey: account.node_pubkey.clone(),
        commission: account.commission,
        epoch_credits,
        votes: non_empty(account.votes.iter().flatten(), vote_record),
        root_slot: account.root_slot,
        last_timestamp: non_empty_optional(last_timestamp, |record| record),
        data: non_empty_optional(account.data.as_ref(), data_record),
    })
}

fn authorized_voter_record(voter: &RawAuthorizedVoter) -> AuthorizedVoterRecord {
    AuthorizedVoterRecord {
        authorized_voter: Some(voter.authorized_voter.clone()),
        epoch: Some(voter.epoch),
    }
}

fn prior_voter_record(voter: &RawPriorVoter) -> PriorVoterRecord {
    PriorVoterRecord {
        authorized_pubkey: Some(voter.authorized_pubkey.clone()),
        epoch_of_last_authorized_switch: Some(widen(voter.epoch_of_last_authorized_switch)),
        target_epoch: Some(widen(voter.target_epoch)),
    }
}

fn epoch_credit_record(credit: &RawEpochCredit) -> EpochCreditRecord {
    EpochCreditRecord {
        credits: Some(credit.credits),
        epoch: Some(credit.epoch),
        previous_credits: Some(credit.previous_credits),
    }
}

fn vote_record(vote: &RawVote) -> VoteRecord {
    VoteRecord {
        confirmation_count: Some(vote.confirmation_count),
        slot: Some(vote.slot),
    }
}

fn data_record(data: &RawData) -> DataRecord {
    DataRecord {
        raw: Some(data.raw.clone()),
        encoding: Some(data.encoding.clone()),
    }
}
