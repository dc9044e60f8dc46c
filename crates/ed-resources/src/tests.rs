//! Unit tests for ed-resources.

#[cfg(test)]
mod pool {
    use ed_core::{Minute, ResourceId};

    use crate::{ResourceKind, ResourcePool};

    #[test]
    fn starts_fully_available() {
        let pool = ResourcePool::new(ResourceKind::Doctor, 3);
        assert_eq!(pool.capacity(), 3);
        assert_eq!(pool.busy_count(), 0);
        assert_eq!(pool.find_available(Minute::ZERO), Some(ResourceId(0)));
        assert_eq!(pool.next_release_after(Minute::ZERO), None);
    }

    #[test]
    fn assign_marks_busy_until_free_at() {
        let mut pool = ResourcePool::new(ResourceKind::Bed, 1);
        pool.assign(ResourceId(0), Minute(10), 45);
        let bed = pool.get(ResourceId(0)).unwrap();
        assert!(!bed.available);
        assert_eq!(bed.free_at, Minute(55));
        assert_eq!(pool.find_available(Minute(54)), None);
        // Still marked busy until reclaimed, even once time has passed.
        assert_eq!(pool.find_available(Minute(60)), None);
        assert_eq!(pool.next_release_after(Minute(10)), Some(Minute(55)));
    }

    #[test]
    fn reclaim_releases_at_exact_minute() {
        let mut pool = ResourcePool::new(ResourceKind::Doctor, 2);
        pool.assign(ResourceId(0), Minute(0), 30);
        pool.assign(ResourceId(1), Minute(0), 60);
        assert_eq!(pool.reclaim_expired(Minute(29)), 0);
        assert_eq!(pool.reclaim_expired(Minute(30)), 1);
        assert_eq!(pool.find_available(Minute(30)), Some(ResourceId(0)));
        assert_eq!(pool.busy_count(), 1);
        assert_eq!(pool.next_release_after(Minute(30)), Some(Minute(60)));
        assert_eq!(pool.reclaim_expired(Minute(500)), 1);
        assert_eq!(pool.busy_count(), 0);
    }

    #[test]
    fn find_skips_busy_slots() {
        let mut pool = ResourcePool::new(ResourceKind::Doctor, 3);
        pool.assign(ResourceId(0), Minute(0), 10);
        pool.assign(ResourceId(1), Minute(0), 10);
        assert_eq!(pool.find_available(Minute(0)), Some(ResourceId(2)));
    }

    #[test]
    fn empty_pool_never_has_capacity() {
        let mut pool = ResourcePool::new(ResourceKind::Doctor, 0);
        assert_eq!(pool.capacity(), 0);
        assert_eq!(pool.reclaim_expired(Minute(1_000)), 0);
        assert_eq!(pool.find_available(Minute(1_000)), None);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn double_assignment_is_a_defect() {
        let mut pool = ResourcePool::new(ResourceKind::Bed, 1);
        pool.assign(ResourceId(0), Minute(0), 10);
        pool.assign(ResourceId(0), Minute(5), 10);
    }

    #[test]
    fn kind_display() {
        assert_eq!(ResourceKind::Doctor.to_string(), "doctor");
        assert_eq!(ResourceKind::Bed.to_string(), "bed");
    }
}
