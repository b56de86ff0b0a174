//! Set algebra over collections of cousins.

use super::{lines_strategy, place_strategy};
use kindred::{Ancestries, AncestriesList};
use proptest::prelude::*;

fn collection(lines: &[String]) -> Ancestries {
    Ancestries::from_lines(lines).unwrap()
}

proptest! {
    /// Filter and exclude split a collection into two disjoint parts.
    #[test]
    fn prop_filter_exclude_partition(lines in lines_strategy(), place in place_strategy()) {
        let cousins = collection(&lines);
        let kept = cousins.filter(&place);
        let rest = cousins.exclude(&place);
        prop_assert_eq!(kept.len() + rest.len(), cousins.len());
        prop_assert!(kept.iter().all(|a| a.contains(&place)));
        prop_assert!(rest.iter().all(|a| !a.contains(&place)));
    }

    /// Each cousin lands in at most one cluster group, the first it matches.
    #[test]
    fn prop_cluster_groups_disjoint(
        lines in lines_strategy(),
        names in prop::collection::vec(place_strategy(), 1..4),
    ) {
        let cousins = collection(&lines);
        let groups = cousins.cluster_groups(&names);
        prop_assert_eq!(groups.len(), names.len());

        let total: usize = groups.iter().map(|(_, group)| group.len()).sum();
        prop_assert!(total <= cousins.len());
        prop_assert_eq!(cousins.cluster(&names).len(), total);

        for (i, (name, group)) in groups.iter().enumerate() {
            for ancestry in group {
                prop_assert!(ancestry.contains(name));
                prop_assert!(names[..i].iter().all(|earlier| !ancestry.contains(earlier)));
            }
        }
    }

    /// Exclusion removes every cousin matching any term.
    #[test]
    fn prop_exclude_all(
        lines in lines_strategy(),
        names in prop::collection::vec(place_strategy(), 0..3),
    ) {
        let left = collection(&lines).exclude_all(&names);
        for ancestry in &left {
            prop_assert!(names.iter().all(|name| !ancestry.contains(name)));
        }
    }

    /// Uniting keeps every cousin of every file, in order.
    #[test]
    fn prop_unite_concatenates(first in lines_strategy(), second in lines_strategy()) {
        let list = AncestriesList::new(vec![collection(&first), collection(&second)]);
        let united = list.unite();
        prop_assert_eq!(united.len(), first.len() + second.len());
        prop_assert_eq!(&united.as_slice()[..first.len()], list.iter().next().unwrap().as_slice());
    }

    /// Intersections only select cousins with the common information.
    #[test]
    fn prop_intersections_select_common(first in lines_strategy(), second in lines_strategy()) {
        let list = AncestriesList::new(vec![collection(&first), collection(&second)]);
        let names = list.common_names();
        let locations = list.common_locations();

        prop_assert!(list.intersect().len() <= first.len());
        for ancestry in &list.intersect_by_names() {
            prop_assert!(ancestry.has_any_name(&names));
        }
        for ancestry in &list.intersect_by_locations() {
            prop_assert!(ancestry.has_any_location(&locations));
        }
        prop_assert!(
            list.intersect_by_names_and_locations().len()
                <= list.intersect_by_names().len().min(list.intersect_by_locations().len())
        );
    }

    /// A file intersected with itself is the file.
    #[test]
    fn prop_self_intersection(lines in lines_strategy()) {
        let cousins = collection(&lines);
        let list = AncestriesList::new(vec![cousins.clone(), cousins.clone()]);
        prop_assert_eq!(list.intersect(), cousins);
    }
}
