#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    debug_assert!(subtrahend <= capacity);
    (index + capacity - subtrahend) % capacity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_add_crosses_end() {
        assert_eq!(wrap_add(3, 1, 4), 0);
        assert_eq!(wrap_add(2, 3, 4), 1);
        assert_eq!(wrap_add(0, 4, 4), 0);
    }

    #[test]
    fn wrap_sub_crosses_start() {
        assert_eq!(wrap_sub(0, 1, 4), 3);
        assert_eq!(wrap_sub(1, 3, 4), 2);
        assert_eq!(wrap_sub(2, 0, 4), 2);
    }
}
