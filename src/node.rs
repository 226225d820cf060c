use std::cmp::Ordering;

use crate::Height;

pub type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone, Debug)]
pub struct Node<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
    // Height of the subtree rooted here; a leaf has height 1.
    pub height: Height,
}

pub fn height<T>(link: &Link<T>) -> Height {
    match link {
        Some(node) => node.height,
        None => 0,
    }
}

impl<T> Node<T> {
    pub fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    pub fn update_height(&mut self) {
        self.height = 1 + std::cmp::max(height(&self.left), height(&self.right));
    }

    pub fn balance_factor(&self) -> i32 {
        height(&self.left) as i32 - height(&self.right) as i32
    }

    /// Walks the subtree asserting ordering, cached heights and balance.
    /// Values must lie strictly between `lower` and `upper` when given.
    /// Returns the recomputed height and the number of nodes.
    pub fn check_invariants<C>(&self, cmp: &C, lower: Option<&T>, upper: Option<&T>) -> (Height, usize)
    where
        C: Fn(&T, &T) -> Ordering,
    {
        if let Some(lower) = lower {
            assert_eq!(
                cmp(lower, &self.value),
                Ordering::Less,
                "value is not greater than its left ancestor"
            );
        }
        if let Some(upper) = upper {
            assert_eq!(
                cmp(&self.value, upper),
                Ordering::Less,
                "value is not less than its right ancestor"
            );
        }

        let (h0, n0) = match &self.left {
            Some(left) => left.check_invariants(cmp, lower, Some(&self.value)),
            None => (0, 0),
        };
        let (h1, n1) = match &self.right {
            Some(right) => right.check_invariants(cmp, Some(&self.value), upper),
            None => (0, 0),
        };

        let h = 1 + std::cmp::max(h0, h1);
        assert_eq!(self.height, h, "cached height is stale");
        assert!(
            (h0 as i32 - h1 as i32).abs() <= 1,
            "node is out of balance: left height={}, right height={}",
            h0,
            h1
        );

        (h, n0 + n1 + 1)
    }
}

pub fn find<'a, T, C>(mut link: &'a Link<T>, value: &T, cmp: &C) -> Option<&'a T>
where
    C: Fn(&T, &T) -> Ordering,
{
    while let Some(node) = link {
        match cmp(value, &node.value) {
            Ordering::Less => link = &node.left,
            Ordering::Greater => link = &node.right,
            Ordering::Equal => return Some(&node.value),
        }
    }
    None
}

pub fn find_mut<'a, T, C>(link: &'a mut Link<T>, value: &T, cmp: &C) -> Option<&'a mut T>
where
    C: Fn(&T, &T) -> Ordering,
{
    let node = link.as_mut()?;
    match cmp(value, &node.value) {
        Ordering::Less => find_mut(&mut node.left, value, cmp),
        Ordering::Greater => find_mut(&mut node.right, value, cmp),
        Ordering::Equal => Some(&mut node.value),
    }
}

pub fn min<T>(link: &Link<T>) -> Option<&T> {
    let mut node = link.as_ref()?;
    while let Some(left) = &node.left {
        node = left;
    }
    Some(&node.value)
}

pub fn max<T>(link: &Link<T>) -> Option<&T> {
    let mut node = link.as_ref()?;
    while let Some(right) = &node.right {
        node = right;
    }
    Some(&node.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(value: i32, left: Link<i32>, right: Link<i32>) -> Link<i32> {
        let mut node = Node::leaf(value);
        node.left = left;
        node.right = right;
        node.update_height();
        Some(node)
    }

    #[test]
    fn height_test() {
        let empty: Link<i32> = None;
        assert_eq!(height(&empty), 0);

        let t = make(2, make(1, None, None), None);
        assert_eq!(height(&t), 2);
        assert_eq!(t.as_ref().map(|n| n.balance_factor()), Some(1));
    }

    #[test]
    fn min_max_test() {
        let t = make(
            4,
            make(2, make(1, None, None), make(3, None, None)),
            make(6, None, make(7, None, None)),
        );
        assert_eq!(min(&t), Some(&1));
        assert_eq!(max(&t), Some(&7));
        assert_eq!(min::<i32>(&None), None);
        assert_eq!(find(&t, &3, &i32::cmp), Some(&3));
        assert_eq!(find(&t, &5, &i32::cmp), None);
    }

    #[test]
    #[should_panic(expected = "not less than its right ancestor")]
    fn check_invariants_detects_disorder_test() {
        let t = make(2, make(3, None, None), None);
        if let Some(node) = &t {
            node.check_invariants(&i32::cmp, None, None);
        }
    }

    #[test]
    #[should_panic(expected = "out of balance")]
    fn check_invariants_detects_imbalance_test() {
        let t = make(1, None, make(2, None, make(3, None, None)));
        if let Some(node) = &t {
            node.check_invariants(&i32::cmp, None, None);
        }
    }
}
