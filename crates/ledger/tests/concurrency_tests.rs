//! Races through `SharedLedger`: concurrent verdicts on one submission,
//! concurrent claims by one account and parallel creation. The lock makes
//! every operation atomic; these tests pin the winner-takes-all outcomes.

use std::thread;

use cleanproof_common::economics::BASE_IMPACT_REWARD;
use cleanproof_common::errors::LedgerError;
use cleanproof_common::types::{Address, EvidenceRef, GeoPoint};

use cleanproof_ledger::events::ClaimOutcome;
use cleanproof_ledger::roles::Role;
use cleanproof_ledger::shared::SharedLedger;

fn addr(byte: u8) -> Address {
    Address::from_bytes([byte; 20])
}

const ADMIN: u8 = 0x01;
const SUBMITTER: u8 = 0x10;

fn ledger_with_verifiers(verifiers: &[Address]) -> SharedLedger {
    let ledger = SharedLedger::new(addr(ADMIN));
    for verifier in verifiers {
        ledger
            .grant_role(addr(ADMIN), Role::Verifier, *verifier)
            .expect("grant");
    }
    ledger
}

fn create(ledger: &SharedLedger) -> u64 {
    ledger
        .create_submission(
            addr(SUBMITTER),
            EvidenceRef::new("QmBefore"),
            EvidenceRef::new("QmAfter"),
            GeoPoint::new(0, 0),
            None,
            None,
            0,
            1_700_000_000,
        )
        .expect("create")
}

// ════════════════════════════════════════════════════════════════════════════════
// RACING VERDICTS
// ════════════════════════════════════════════════════════════════════════════════

#[test]
fn racing_approvals_commit_exactly_once() {
    let verifiers: Vec<Address> = (2u8..10).map(addr).collect();
    let ledger = ledger_with_verifiers(&verifiers);
    let id = create(&ledger);

    let handles: Vec<_> = verifiers
        .iter()
        .map(|verifier| {
            let ledger = ledger.clone();
            let verifier = *verifier;
            thread::spawn(move || ledger.approve(verifier, id, 1_700_000_100))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().expect("join")).collect();

    let wins = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(wins, 1, "exactly one approval must commit");
    for result in results.iter().filter(|r| r.is_err()) {
        assert_eq!(result.as_ref().err(), Some(&LedgerError::InvalidState { id }));
    }

    // The base reward was credited exactly once.
    assert_eq!(
        ledger.accrued_total(&addr(SUBMITTER)),
        BASE_IMPACT_REWARD
    );
}

#[test]
fn racing_approve_and_reject_pick_one_terminal_state() {
    let ledger = ledger_with_verifiers(&[addr(0x02), addr(0x03)]);
    let id = create(&ledger);

    let approver = {
        let ledger = ledger.clone();
        thread::spawn(move || ledger.approve(addr(0x02), id, 1_700_000_100).is_ok())
    };
    let rejecter = {
        let ledger = ledger.clone();
        thread::spawn(move || ledger.reject(addr(0x03), id, 1_700_000_100).is_ok())
    };

    let approved = approver.join().expect("join");
    let rejected = rejecter.join().expect("join");
    assert!(approved ^ rejected, "exactly one verdict must commit");

    let status = ledger.submission(id).expect("exists").status;
    assert!(status.is_terminal());
    assert_eq!(status.is_approved(), approved);
    let expected = if approved { BASE_IMPACT_REWARD } else { 0 };
    assert_eq!(ledger.accrued_total(&addr(SUBMITTER)), expected);
}

// ════════════════════════════════════════════════════════════════════════════════
// RACING CLAIMS
// ════════════════════════════════════════════════════════════════════════════════

#[test]
fn racing_claims_pay_out_once() {
    let ledger = ledger_with_verifiers(&[addr(0x02)]);
    let id = create(&ledger);
    ledger.approve(addr(0x02), id, 1_700_000_100).expect("approve");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ledger = ledger.clone();
            thread::spawn(move || ledger.claim(addr(SUBMITTER), 0).expect("claim"))
        })
        .collect();

    let outcomes: Vec<ClaimOutcome> =
        handles.into_iter().map(|h| h.join().expect("join")).collect();

    let paid: Vec<_> = outcomes
        .iter()
        .filter(|o| matches!(o, ClaimOutcome::Claimed { .. }))
        .collect();
    assert_eq!(paid.len(), 1, "exactly one claim must pay out");
    assert_eq!(paid[0].amount(), BASE_IMPACT_REWARD);

    assert_eq!(ledger.balance_of(&addr(SUBMITTER)), BASE_IMPACT_REWARD);
    assert_eq!(ledger.accrued_total(&addr(SUBMITTER)), 0);
}

// ════════════════════════════════════════════════════════════════════════════════
// PARALLEL CREATION
// ════════════════════════════════════════════════════════════════════════════════

#[test]
fn parallel_creation_assigns_unique_ids() {
    let ledger = SharedLedger::new(addr(ADMIN));

    let handles: Vec<_> = (0u8..8)
        .map(|i| {
            let ledger = ledger.clone();
            thread::spawn(move || {
                (0..10)
                    .map(|_| {
                        ledger
                            .create_submission(
                                addr(0x10 + i),
                                EvidenceRef::new("QmBefore"),
                                EvidenceRef::new("QmAfter"),
                                GeoPoint::new(0, 0),
                                None,
                                None,
                                0,
                                1_700_000_000,
                            )
                            .expect("create")
                    })
                    .collect::<Vec<u64>>()
            })
        })
        .collect();

    let mut ids: Vec<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().expect("join"))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 80, "every id must be unique");
    assert_eq!(*ids.first().expect("nonempty"), 0);
    assert_eq!(*ids.last().expect("nonempty"), 79);
}
