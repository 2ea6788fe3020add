pub mod epipolar;
