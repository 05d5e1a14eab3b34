use doublezero_timelock::{
    compute_tx_id,
    constants::{MAX_DELAY, MIN_DELAY},
    TimelockError, TimelockEvent, TxStatus,
};
use solana_program::pubkey::Pubkey;

use test_helpers::*;

#[test]
fn test_queue_records_transaction() {
    let mut ctx = setup(&[]);
    let target = Pubkey::new_unique();
    let data = NameCall::SetName("dz".to_string()).pack();
    let scheduled_at = NOW + MIN_DELAY + 1;

    let tx_id = ctx
        .timelock
        .queue(&ctx.owner, target, 5, data.clone(), scheduled_at)
        .unwrap();
    assert_eq!(tx_id, compute_tx_id(&target, 5, &data, scheduled_at));

    let record = ctx.timelock.get_tx_info(&tx_id);
    assert_eq!(record.status, TxStatus::Queued);
    assert_eq!(record.target, target);
    assert_eq!(record.value, 5);
    assert_eq!(record.data, data);
    assert_eq!(record.scheduled_at, scheduled_at);

    assert_eq!(
        ctx.timelock.events(),
        &[TimelockEvent::Queue {
            tx_id,
            target,
            value: 5,
            data,
            scheduled_at,
        }]
    );
    assert_eq!(ctx.timelock.queued().count(), 1);
}

#[test]
fn test_queue_window_bounds_are_inclusive() {
    let mut ctx = setup(&[]);
    let target = Pubkey::new_unique();

    ctx.timelock
        .queue(&ctx.owner, target, 0, vec![1], NOW + MIN_DELAY)
        .unwrap();
    ctx.timelock
        .queue(&ctx.owner, target, 0, vec![2], NOW + MAX_DELAY)
        .unwrap();
    assert_eq!(ctx.timelock.queued().count(), 2);
}

#[test]
fn test_queue_outside_window() {
    let mut ctx = setup(&[]);
    let target = Pubkey::new_unique();

    for given in [NOW + MIN_DELAY - 1, NOW + MAX_DELAY + 1, NOW, 0] {
        let err = ctx
            .timelock
            .queue(&ctx.owner, target, 0, vec![], given)
            .unwrap_err();
        assert_eq!(
            err,
            TimelockError::TimestampNotInRange {
                min_allowed: NOW + MIN_DELAY,
                max_allowed: NOW + MAX_DELAY,
                given,
            }
        );
    }

    assert!(ctx.timelock.events().is_empty());
    assert_eq!(ctx.timelock.queued().count(), 0);
}

#[test]
fn test_queue_window_follows_clock() {
    let mut ctx = setup(&[]);
    let target = Pubkey::new_unique();
    let scheduled_at = NOW + MIN_DELAY;

    ctx.clock.advance(1);
    let err = ctx
        .timelock
        .queue(&ctx.owner, target, 0, vec![], scheduled_at)
        .unwrap_err();
    assert!(matches!(err, TimelockError::TimestampNotInRange { .. }));
}

#[test]
fn test_queue_twice_fails() {
    let mut ctx = setup(&[]);
    let target = Pubkey::new_unique();
    let scheduled_at = NOW + MIN_DELAY + 10;

    let tx_id = ctx
        .timelock
        .queue(&ctx.owner, target, 0, vec![7], scheduled_at)
        .unwrap();
    let err = ctx
        .timelock
        .queue(&ctx.owner, target, 0, vec![7], scheduled_at)
        .unwrap_err();
    assert_eq!(err, TimelockError::AlreadyQueued(tx_id));
    assert_eq!(ctx.timelock.events().len(), 1);
}

#[test]
fn test_queue_not_authorized() {
    let mut ctx = setup(&[]);
    let stranger = Pubkey::new_unique();

    let err = ctx
        .timelock
        .queue(
            &stranger,
            Pubkey::new_unique(),
            0,
            vec![],
            NOW + MIN_DELAY + 1,
        )
        .unwrap_err();
    assert_eq!(err, TimelockError::NotAuthorized(stranger));
    assert_eq!(ctx.timelock.queued().count(), 0);
}

#[test]
fn test_queue_allowlisted_key() {
    let delegate = Pubkey::new_unique();
    let mut ctx = setup(&[delegate]);

    ctx.timelock
        .queue(
            &delegate,
            Pubkey::new_unique(),
            0,
            vec![],
            NOW + MIN_DELAY + 1,
        )
        .unwrap();
}
