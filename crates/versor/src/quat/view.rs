use std::ops::{Deref, DerefMut};

use crate::{Quat, Vector};

// Named access to the components of a `Quat` reuses the view of the underlying `Vector<T, 4>`:
// `x`, `y` and `z` are the imaginary parts, `w` is the real part.

impl<T> Deref for Quat<T> {
    type Target = <Vector<T, 4> as Deref>::Target;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.vec.deref()
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.vec.deref_mut()
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec4, Quatf};

    #[test]
    fn components() {
        let mut q = Quatf::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!((q.x, q.y, q.z, q.w), (1.0, 2.0, 3.0, 4.0));

        q.w = -4.0;
        q.y += 1.0;
        assert_eq!(q.into_vec(), vec4(1.0, 3.0, 3.0, -4.0));
    }
}
