mod carving;
