mod honeycomb;
mod mesh;
